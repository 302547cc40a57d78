//! 사용자 계정 프로비저닝 서비스 모듈
//!
//! [`AccountsService`](accounts_service::AccountsService)를 통해 회원가입과 로그인을 처리합니다.

pub mod accounts_service;

pub use accounts_service::{aggregate_errors, AccountsService};
