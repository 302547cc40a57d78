//! # Domain Models Module
//!
//! 엔티티가 아닌 도메인 값 객체를 정의합니다.
//!
//! - [`identity`] - 자격 증명 저장소 작업 결과 (`IdentityResult`, `IdentityError`)

pub mod identity;

pub use identity::{IdentityError, IdentityResult};
