//! 자격 증명 저장소 작업 결과 모델
//!
//! 계정 생성, 역할 생성, 역할 부여는 "정상적인 거부"(정책 위반, 중복)를
//! 에러가 아닌 실패 결과로 돌려줍니다. 실패 사유는 저장소가 만든 순서를 유지합니다.

use serde::{Deserialize, Serialize};

/// 개별 실패 사유
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityError {
    /// 기계가 읽는 코드 (예: `DuplicateEmail`)
    pub code: String,
    /// 사람이 읽는 설명 (예: `Email 'a@b.com' is already taken.`)
    pub description: String,
}

impl IdentityError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn invalid_email(email: &str) -> Self {
        Self::new("InvalidEmail", format!("Email '{}' is invalid.", email))
    }

    pub fn duplicate_user_name(user_name: &str) -> Self {
        Self::new("DuplicateUserName", format!("Username '{}' is already taken.", user_name))
    }

    pub fn duplicate_email(email: &str) -> Self {
        Self::new("DuplicateEmail", format!("Email '{}' is already taken.", email))
    }

    pub fn duplicate_role_name(role: &str) -> Self {
        Self::new("DuplicateRoleName", format!("Role name '{}' is already taken.", role))
    }

    pub fn role_not_found(role: &str) -> Self {
        Self::new("RoleNotFound", format!("Role {} does not exist.", role))
    }

    pub fn user_already_in_role(role: &str) -> Self {
        Self::new("UserAlreadyInRole", format!("User already in role '{}'.", role))
    }

    pub fn user_not_found(email: &str) -> Self {
        Self::new("UserNotFound", format!("User '{}' does not exist.", email))
    }
}

/// 저장소 작업 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResult {
    pub succeeded: bool,
    pub errors: Vec<IdentityError>,
}

impl IdentityResult {
    pub fn success() -> Self {
        Self {
            succeeded: true,
            errors: Vec::new(),
        }
    }

    /// 실패 결과. 사유가 비어 있으면 일반 실패 사유 하나를 채워 넣습니다.
    pub fn failed(errors: Vec<IdentityError>) -> Self {
        let errors = if errors.is_empty() {
            vec![IdentityError::new("DefaultError", "An unknown failure has occurred.")]
        } else {
            errors
        };

        Self {
            succeeded: false,
            errors,
        }
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.description.as_str())
    }
}
