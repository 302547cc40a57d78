//! # Identity Policy
//!
//! 자격 증명 저장소 구현체들이 공통으로 적용하는 계정 검증 규칙입니다.
//! 실패 사유는 비밀번호 정책 → 사용자 정보 순서로 수집되며, 하나의 규칙이
//! 실패해도 나머지 규칙을 계속 검사해 모든 사유를 한 번에 돌려줍니다.

use validator::ValidateEmail;

use crate::config::PasswordPolicy;
use crate::domain::entities::users::User;
use crate::domain::models::IdentityError;

/// 비밀번호 정책 위반 사유를 모두 수집합니다.
pub fn validate_password(policy: &PasswordPolicy, password: &str) -> Vec<IdentityError> {
    let mut errors = Vec::new();

    if password.chars().count() < policy.required_length {
        errors.push(IdentityError::new(
            "PasswordTooShort",
            format!("Passwords must be at least {} characters.", policy.required_length),
        ));
    }

    if policy.require_non_alphanumeric && password.chars().all(char::is_alphanumeric) {
        errors.push(IdentityError::new(
            "PasswordRequiresNonAlphanumeric",
            "Passwords must have at least one non alphanumeric character.",
        ));
    }

    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(IdentityError::new(
            "PasswordRequiresDigit",
            "Passwords must have at least one digit ('0'-'9').",
        ));
    }

    if policy.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(IdentityError::new(
            "PasswordRequiresLower",
            "Passwords must have at least one lowercase ('a'-'z').",
        ));
    }

    if policy.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(IdentityError::new(
            "PasswordRequiresUpper",
            "Passwords must have at least one uppercase ('A'-'Z').",
        ));
    }

    errors
}

/// 저장소 조회 없이 판단 가능한 사용자 정보 규칙을 검사합니다.
///
/// 중복 여부는 저장소가 원자적으로 판단하므로 여기서 다루지 않습니다.
pub fn validate_user(user: &User) -> Vec<IdentityError> {
    let mut errors = Vec::new();

    if !user.email.validate_email() {
        errors.push(IdentityError::invalid_email(&user.email));
    }

    errors
}

/// 계정 생성 전 검사: 비밀번호 정책 사유 다음에 사용자 정보 사유
pub fn validate_account(policy: &PasswordPolicy, user: &User, password: &str) -> Vec<IdentityError> {
    let mut errors = validate_password(policy, password);
    errors.extend(validate_user(user));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_policy() -> PasswordPolicy {
        PasswordPolicy {
            required_length: 8,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_non_alphanumeric: true,
        }
    }

    #[test]
    fn test_default_policy_only_checks_length() {
        let policy = PasswordPolicy::default();

        assert!(validate_password(&policy, "abcdef").is_empty());

        let errors = validate_password(&policy, "abc");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].description, "Passwords must be at least 6 characters.");
    }

    #[test]
    fn test_strict_policy_reports_every_violation_in_order() {
        let codes: Vec<String> = validate_password(&strict_policy(), "abc")
            .into_iter()
            .map(|e| e.code)
            .collect();

        assert_eq!(
            codes,
            vec![
                "PasswordTooShort",
                "PasswordRequiresNonAlphanumeric",
                "PasswordRequiresDigit",
                "PasswordRequiresUpper",
            ]
        );
        assert!(validate_password(&strict_policy(), "Abcdef1!").is_empty());
    }

    #[test]
    fn test_invalid_email_is_reported_after_password_errors() {
        let user = User::new_registered("not-an-email".to_string(), "Jane".to_string());
        let errors = validate_account(&PasswordPolicy::default(), &user, "123");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code, "PasswordTooShort");
        assert_eq!(errors[1].description, "Email 'not-an-email' is invalid.");
    }

    #[test]
    fn test_valid_account_has_no_errors() {
        let user = User::new_registered("jane@example.com".to_string(), "Jane".to_string());

        assert!(validate_account(&PasswordPolicy::default(), &user, "secret1").is_empty());
    }
}
