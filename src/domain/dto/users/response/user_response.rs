use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_confirmed: bool,
    pub phone_number_confirmed: bool,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn with_roles(user: User, roles: Vec<String>) -> Self {
        let User {
            id,
            user_name,
            email,
            full_name,
            phone_number,
            email_confirmed,
            phone_number_confirmed,
            created_at,
        } = user;

        Self {
            id,
            user_name,
            email,
            full_name,
            phone_number,
            email_confirmed,
            phone_number_confirmed,
            roles,
            created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::with_roles(user, Vec::new())
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}
