//! # 계정 관련 응답 DTO 모듈
//!
//! ### 회원가입 응답
//! ```json
//! {
//!   "user": {
//!     "id": "6f1c2a0e-8a51-4c59-9c1e-2d0f8e3b1a77",
//!     "user_name": "jane@example.com",
//!     "email": "jane@example.com",
//!     "full_name": "Jane Doe",
//!     "phone_number": null,
//!     "email_confirmed": false,
//!     "phone_number_confirmed": false,
//!     "roles": [],
//!     "created_at": "2024-06-01T10:00:00Z"
//!   },
//!   "message": "User created successfully"
//! }
//! ```
//!
//! 응답에는 비밀번호나 해시가 절대 포함되지 않습니다.

pub mod user_response;

pub use user_response::{UserResponse, CreateUserResponse, LoginResponse};
