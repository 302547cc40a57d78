//! # Core Module
//!
//! 서비스 전반에서 공유되는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증, 계정 생성, 부트스트랩 실패를 구분하는 태그된 에러
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러에 컨텍스트를 붙여 변환하는 확장 trait
//!
//! ## 의존성 전달 방식
//!
//! 서비스는 전역 컨테이너에서 의존성을 찾지 않습니다. 자격 증명 저장소는
//! `Arc<dyn CredentialStore>` 형태로 생성자에 명시적으로 전달됩니다.
//!
//! ```rust,ignore
//! let store: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::with_policy(PasswordPolicy::default()));
//! let bootstrap = BootstrapService::new(store.clone());
//! let accounts = AccountsService::new(store);
//! ```

pub mod errors;

pub use errors::*;
