//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시 자격 증명 저장소(`Arc<dyn CredentialStore>`)를 주입받으며
//! 그 외의 상태를 갖지 않습니다.
//!
//! # Modules
//!
//! - [`accounts`] - 회원가입(사용자 생성)과 로그인
//! - [`bootstrap`] - 시작 시 역할과 기본 관리자 계정 보장
//!
//! # Examples
//!
//! ```rust,ignore
//! let store: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::with_policy(policy));
//!
//! BootstrapService::new(store.clone()).run(&bootstrap_config).await?;
//! let accounts = AccountsService::new(store);
//! ```

pub mod accounts;
pub mod bootstrap;

#[cfg(test)]
pub(crate) mod testing;

pub use accounts::AccountsService;
pub use bootstrap::{BootstrapReport, BootstrapService};
