//! 자격 증명 저장소 계층
//!
//! 서비스 계층은 [`CredentialStore`](credential_store::CredentialStore) trait에만 의존하며,
//! 구현체는 `main`에서 선택되어 `Arc<dyn CredentialStore>`로 각 서비스에 전달됩니다.
//!
//! # Modules
//!
//! - [`credential_store`] - 저장소 capability trait
//! - [`identity_policy`] - 비밀번호 정책과 사용자 정보 검증 규칙
//! - [`memory`] - 메모리 구현체 (로컬 개발, 테스트)
//! - [`mongo`] - MongoDB 구현체
//!
//! # Examples
//!
//! ```rust,ignore
//! let store: Arc<dyn CredentialStore> = Arc::new(MongoCredentialStore::new(database, policy));
//! let user = store.find_by_email("admin@autoestate.com").await?;
//! ```

pub mod credential_store;
pub mod identity_policy;
pub mod memory;
pub mod mongo;

pub use credential_store::CredentialStore;
pub use memory::InMemoryCredentialStore;
pub use mongo::MongoCredentialStore;
