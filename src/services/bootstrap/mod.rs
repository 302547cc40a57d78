//! 시작 시 역할/기본 관리자 시딩

pub mod bootstrap_service;

pub use bootstrap_service::{BootstrapReport, BootstrapService};
