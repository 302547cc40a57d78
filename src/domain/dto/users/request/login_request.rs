//! 로그인 요청 DTO

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 이메일/비밀번호 로그인 요청
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "이메일은 필수입니다"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required(message = "비밀번호는 필수입니다"), length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    pub fn into_parts(self) -> Option<(String, String)> {
        match (self.email, self.password) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
