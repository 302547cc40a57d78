//! # Credential Store Capability
//!
//! 사용자/역할 레코드와 비밀번호 해시를 소유하는 외부 협력자에 대한 추상화입니다.
//! 서비스 계층은 이 trait의 시그니처와 성공/실패 의미에만 의존하며,
//! 저장 방식(MongoDB, 메모리)에는 의존하지 않습니다.
//!
//! ## 결과 의미
//!
//! - `Ok(IdentityResult)` - 작업이 처리됨. 정책 위반, 중복 같은 정상적인 거부는
//!   `succeeded == false`인 결과로 표현됩니다.
//! - `Err(AppError)` - 저장소 인프라 오류 (연결 실패 등).
//!
//! ## 동시성
//!
//! 구현체는 `create_account`를 원자적으로 수행해야 합니다. 같은 이메일로 동시에
//! 두 번 호출되면 정확히 하나만 성공하고, 나머지는 `DuplicateEmail` 실패 결과를 받습니다.

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::IdentityResult;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 사용자 레코드와 자격 증명을 함께 원자적으로 생성합니다.
    async fn create_account(&self, user: &User, password: &str) -> Result<IdentityResult, AppError>;

    /// 이메일로 사용자를 조회합니다 (대소문자 무시).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn role_exists(&self, name: &str) -> Result<bool, AppError>;

    async fn create_role(&self, name: &str) -> Result<IdentityResult, AppError>;

    /// 사용자에게 역할들을 부여합니다. 존재하지 않는 역할이나 이미 가진 역할이 있으면
    /// 아무것도 바꾸지 않고 실패 결과를 반환합니다.
    async fn assign_roles(&self, user: &User, roles: &[String]) -> Result<IdentityResult, AppError>;

    /// 사용자가 가진 역할 이름 목록 (부여된 순서)
    async fn get_roles(&self, user: &User) -> Result<Vec<String>, AppError>;

    /// 비밀번호가 일치하면 사용자를 반환합니다. 사용자가 없거나 불일치하면 `None`.
    async fn check_password(&self, email: &str, password: &str) -> Result<Option<User>, AppError>;
}
