//! AutoEstate 계정 서비스
//!
//! 부동산 매물 플랫폼의 계정 프로비저닝과 시작 부트스트랩을 담당합니다.
//!
//! # Features
//!
//! - **회원가입**: 이메일/비밀번호/이름으로 사용자 생성, 저장소 거부 사유를 하나의 메시지로 보고
//! - **로그인**: bcrypt 해시 검증 후 사용자와 역할 반환
//! - **부트스트랩**: 시작 시 역할과 기본 관리자 계정을 멱등적으로 보장
//! - **저장소**: MongoDB 또는 메모리 백엔드 (`STORE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 계정 생성, 로그인, 부트스트랩
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CredentialStore │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use autoestate_identity::config::{BootstrapConfig, PasswordPolicyConfig};
//! use autoestate_identity::repositories::{CredentialStore, InMemoryCredentialStore};
//! use autoestate_identity::services::{AccountsService, BootstrapService};
//!
//! let store: Arc<dyn CredentialStore> =
//!     Arc::new(InMemoryCredentialStore::with_policy(PasswordPolicyConfig::from_env()));
//!
//! BootstrapService::new(store.clone()).run(&BootstrapConfig::from_env()?).await?;
//! let accounts = AccountsService::new(store);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
