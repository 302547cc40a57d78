//! 자격 증명 저장소 결과 모델

pub mod identity_result;

pub use identity_result::{IdentityError, IdentityResult};
