//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 회원가입 사용자
//! let user = User::new_registered("user@example.com".to_string(), "Jane Doe".to_string());
//!
//! // 기본 관리자
//! let admin = User::new_administrator("admin@autoestate.com".to_string(), None);
//! ```

pub mod user;

pub use user::User;
