//! User Entity Implementation
//!
//! 인증 가능한 주체(사용자)를 표현하는 핵심 엔티티입니다.
//! 자격 증명(비밀번호 해시)은 이 엔티티에 포함되지 않으며
//! 자격 증명 저장소의 내부 레코드에서만 관리됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::string_utils::normalize_key;

/// 사용자 엔티티
///
/// 이메일이 사용자를 유일하게 식별하며, 사용자명으로도 그대로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID (UUID v4)
    pub id: String,
    /// 사용자명 (이메일과 동일)
    pub user_name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름 (기본 관리자는 None)
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_confirmed: bool,
    pub phone_number_confirmed: bool,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 회원가입으로 생성되는 사용자
    ///
    /// 이메일과 전화번호는 미인증 상태로 시작합니다.
    pub fn new_registered(email: String, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: email.clone(),
            email,
            full_name: Some(full_name),
            phone_number: None,
            email_confirmed: false,
            phone_number_confirmed: false,
            created_at: Utc::now(),
        }
    }

    /// 부트스트랩에서 생성되는 기본 관리자
    ///
    /// 이메일과 전화번호 모두 인증된 상태로 생성되고, 표시 이름은 비워 둡니다.
    pub fn new_administrator(email: String, phone_number: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: email.clone(),
            email,
            full_name: None,
            phone_number,
            email_confirmed: true,
            phone_number_confirmed: true,
            created_at: Utc::now(),
        }
    }

    /// 유일성 비교에 쓰이는 정규화 이메일
    pub fn normalized_email(&self) -> String {
        normalize_key(&self.email)
    }

    /// 유일성 비교에 쓰이는 정규화 사용자명
    pub fn normalized_user_name(&self) -> String {
        normalize_key(&self.user_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_user_uses_email_as_user_name() {
        let user = User::new_registered("jane@example.com".to_string(), "Jane Doe".to_string());

        assert_eq!(user.user_name, "jane@example.com");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.full_name.as_deref(), Some("Jane Doe"));
        assert!(!user.email_confirmed);
        assert!(!user.phone_number_confirmed);
    }

    #[test]
    fn test_administrator_is_preconfirmed() {
        let admin = User::new_administrator(
            "admin@autoestate.com".to_string(),
            Some("+15550100".to_string()),
        );

        assert_eq!(admin.user_name, admin.email);
        assert_eq!(admin.full_name, None);
        assert!(admin.email_confirmed);
        assert!(admin.phone_number_confirmed);
        assert_eq!(admin.normalized_email(), "ADMIN@AUTOESTATE.COM");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = User::new_registered("a@example.com".to_string(), "A".to_string());
        let b = User::new_registered("a@example.com".to_string(), "A".to_string());

        assert_ne!(a.id, b.id);
    }
}
