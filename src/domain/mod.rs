//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - User, Role
//! ├── Models    - IdentityResult, IdentityError
//! └── DTOs      - RegisterRequest, LoginRequest, UserResponse
//!      │
//!      ▼
//! Application Layer (Services: AccountsService, BootstrapService)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories: CredentialStore 구현체)
//! ```

pub mod entities;
pub mod models;
pub mod dto;
