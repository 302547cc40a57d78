//! # 시작 부트스트랩
//!
//! HTTP 서버가 요청을 받기 전에 필수 보안 데이터를 보장합니다.
//!
//! 1. 설정된 역할마다 존재 여부를 확인하고 없으면 생성 (설정 순서대로)
//! 2. 기본 관리자 계정이 없으면 생성하고 모든 역할을 한 번에 부여
//!
//! 모든 역할 생성이 관리자 역할 부여보다 먼저 끝납니다. 이미 있는 역할이나
//! 관리자 계정은 건드리지 않으므로 몇 번을 실행해도 결과가 같습니다.
//!
//! 어느 단계든 실패하면 `BootstrapFailure`를 반환하며, 호출자는 서버를
//! 시작하지 않고 종료해야 합니다.

use std::sync::Arc;

use crate::config::BootstrapConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::entities::users::User;
use crate::domain::models::IdentityResult;
use crate::repositories::CredentialStore;
use crate::services::accounts::aggregate_errors;

/// 부트스트랩 실행 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// 이번 실행에서 새로 만든 역할 (설정 순서)
    pub roles_created: Vec<String>,
    pub admin_created: bool,
}

pub struct BootstrapService {
    store: Arc<dyn CredentialStore>,
}

impl BootstrapService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// 역할과 기본 관리자를 보장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BootstrapFailure` - 저장소 오류 또는 생성/부여 거부
    pub async fn run(&self, config: &BootstrapConfig) -> Result<BootstrapReport, AppError> {
        log::info!("🚀 부트스트랩 시작: 역할 {}개", config.roles.len());

        let mut report = BootstrapReport::default();

        for role in &config.roles {
            if self.ensure_role(role).await? {
                report.roles_created.push(role.clone());
            }
        }

        report.admin_created = self.ensure_default_admin(config).await?;

        log::info!(
            "✅ 부트스트랩 완료: 새 역할 {}개, 관리자 생성 {}",
            report.roles_created.len(),
            report.admin_created
        );

        Ok(report)
    }

    async fn ensure_role(&self, role: &str) -> Result<bool, AppError> {
        let exists = self
            .store
            .role_exists(role)
            .await
            .bootstrap_context(|| format!("checking role '{}'", role))?;

        if exists {
            log::debug!("역할 존재: {}", role);
            return Ok(false);
        }

        let result = self
            .store
            .create_role(role)
            .await
            .bootstrap_context(|| format!("creating role '{}'", role))?;

        // 다른 인스턴스가 조회와 생성 사이에 먼저 만든 경우
        if only_codes(&result, &["DuplicateRoleName"]) {
            log::info!("역할이 동시에 생성됨, 기존 역할 사용: {}", role);
            return Ok(false);
        }
        ensure_succeeded(result, || format!("creating role '{}'", role))?;

        log::info!("🔑 역할 생성: {}", role);
        Ok(true)
    }

    /// 관리자가 이미 있으면 역할 구성과 상관없이 아무것도 하지 않습니다.
    async fn ensure_default_admin(&self, config: &BootstrapConfig) -> Result<bool, AppError> {
        let admin = &config.default_admin;

        let existing = self
            .store
            .find_by_email(&admin.email)
            .await
            .bootstrap_context(|| format!("looking up default administrator '{}'", admin.email))?;

        if existing.is_some() {
            log::info!("기본 관리자 존재: {}", admin.email);
            return Ok(false);
        }

        let user = User::new_administrator(admin.email.clone(), admin.phone_number.clone());

        let created = self
            .store
            .create_account(&user, &admin.password)
            .await
            .bootstrap_context(|| format!("creating default administrator '{}'", admin.email))?;

        if only_codes(&created, &["DuplicateEmail", "DuplicateUserName"]) {
            let raced = self
                .store
                .find_by_email(&admin.email)
                .await
                .bootstrap_context(|| format!("looking up default administrator '{}'", admin.email))?;
            if raced.is_some() {
                log::info!("기본 관리자가 동시에 생성됨: {}", admin.email);
                return Ok(false);
            }
        }
        ensure_succeeded(created, || format!("creating default administrator '{}'", admin.email))?;

        if !config.roles.is_empty() {
            let assigned = self
                .store
                .assign_roles(&user, &config.roles)
                .await
                .bootstrap_context(|| format!("assigning roles to '{}'", admin.email))?;
            ensure_succeeded(assigned, || format!("assigning roles to '{}'", admin.email))?;
        }

        log::info!("👤 기본 관리자 생성: {} ({})", admin.email, config.roles.join(", "));
        Ok(true)
    }
}

/// 실패 결과의 사유가 모두 주어진 코드 중 하나인지 여부
fn only_codes(result: &IdentityResult, codes: &[&str]) -> bool {
    !result.succeeded
        && !result.errors.is_empty()
        && result.errors.iter().all(|error| codes.contains(&error.code.as_str()))
}

fn ensure_succeeded<F>(result: IdentityResult, step: F) -> Result<(), AppError>
where
    F: FnOnce() -> String,
{
    if result.succeeded {
        return Ok(());
    }

    let reasons = aggregate_errors(&result.errors);
    Err(AppError::BootstrapFailure(format!("{}: {}", step(), reasons.trim_end())))
}
