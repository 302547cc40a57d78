//! 회원가입 요청 DTO
//!
//! 이메일, 비밀번호, 표시 이름 세 필드가 모두 필요합니다.
//! 필드가 없거나 공백뿐인 경우에도 역직렬화는 성공하며, 누락 여부는
//! 서비스 계층의 검증 단계에서 `ValidationError`로 보고됩니다.
//!
//! ```json
//! {
//!   "email": "jane@example.com",
//!   "password": "secret1",
//!   "full_name": "Jane Doe"
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// 비밀번호는 메모리에서만 다뤄지며 저장되거나 로그에 남지 않습니다.
/// 이메일 형식과 비밀번호 정책 검사는 자격 증명 저장소가 담당합니다.
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "이메일은 필수입니다"))]
    pub email: Option<String>,

    /// 공백도 비밀번호의 일부이므로 정리하지 않습니다
    #[serde(default)]
    #[validate(required(message = "비밀번호는 필수입니다"), length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "이름은 필수입니다"))]
    pub full_name: Option<String>,
}

impl RegisterRequest {
    pub fn new(email: &str, password: &str, full_name: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            full_name: Some(full_name.to_string()),
        }
    }

    /// 세 필드가 모두 채워져 있으면 `(email, password, full_name)`으로 분해합니다.
    pub fn into_parts(self) -> Option<(String, String, String)> {
        match (self.email, self.password, self.full_name) {
            (Some(email), Some(password), Some(full_name))
                if !email.trim().is_empty() && !password.is_empty() && !full_name.trim().is_empty() =>
            {
                Some((email, password, full_name))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("full_name", &self.full_name)
            .finish()
    }
}
