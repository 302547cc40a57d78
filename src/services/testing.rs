//! 서비스 테스트용 저장소 더블
//!
//! 메모리 저장소를 감싸 호출 순서를 기록하고, 지정한 작업을 실패시킵니다.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::PasswordPolicy;
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::{IdentityError, IdentityResult};
use crate::repositories::{CredentialStore, InMemoryCredentialStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreateAccount(String),
    FindByEmail(String),
    RoleExists(String),
    CreateRole(String),
    AssignRoles(String, Vec<String>),
    GetRoles(String),
    CheckPassword(String),
}

impl StoreCall {
    pub fn is_creation(&self) -> bool {
        matches!(
            self,
            StoreCall::CreateAccount(_) | StoreCall::CreateRole(_) | StoreCall::AssignRoles(..)
        )
    }
}

pub struct RecordingStore {
    inner: InMemoryCredentialStore,
    calls: Mutex<Vec<StoreCall>>,
    account_errors: Option<Vec<IdentityError>>,
    failing_role: Option<String>,
    competing_replica: bool,
    unavailable: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryCredentialStore::new(PasswordPolicy::default(), 4),
            calls: Mutex::new(Vec::new()),
            account_errors: None,
            failing_role: None,
            competing_replica: false,
            unavailable: false,
        }
    }

    /// 모든 작업이 `DatabaseError`를 반환하는 저장소
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    /// `create_account`가 항상 주어진 사유로 실패합니다.
    pub fn with_account_errors(mut self, errors: Vec<IdentityError>) -> Self {
        self.account_errors = Some(errors);
        self
    }

    /// 해당 이름의 `create_role`이 실패합니다.
    pub fn with_failing_role(mut self, role: &str) -> Self {
        self.failing_role = Some(role.to_string());
        self
    }

    /// 다른 인스턴스가 조회 직후 같은 역할/계정을 먼저 만드는 상황을 흉내 냅니다.
    ///
    /// `role_exists`는 역할을 내부 저장소에 만든 뒤 `false`를 반환하고,
    /// `create_account`는 같은 이메일의 계정을 먼저 넣은 뒤 위임합니다.
    pub fn with_competing_replica(mut self) -> Self {
        self.competing_replica = true;
        self
    }

    pub fn inner(&self) -> &InMemoryCredentialStore {
        &self.inner
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn creation_calls(&self) -> usize {
        self.calls().iter().filter(|call| call.is_creation()).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: StoreCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for RecordingStore {
    async fn create_account(&self, user: &User, password: &str) -> Result<IdentityResult, AppError> {
        self.record(StoreCall::CreateAccount(user.email.clone()))?;
        if let Some(errors) = &self.account_errors {
            return Ok(IdentityResult::failed(errors.clone()));
        }
        if self.competing_replica {
            let winner = User::new_administrator(user.email.clone(), None);
            self.inner.create_account(&winner, password).await?;
        }
        self.inner.create_account(user, password).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.record(StoreCall::FindByEmail(email.to_string()))?;
        self.inner.find_by_email(email).await
    }

    async fn role_exists(&self, name: &str) -> Result<bool, AppError> {
        self.record(StoreCall::RoleExists(name.to_string()))?;
        if self.competing_replica {
            self.inner.create_role(name).await?;
            return Ok(false);
        }
        self.inner.role_exists(name).await
    }

    async fn create_role(&self, name: &str) -> Result<IdentityResult, AppError> {
        self.record(StoreCall::CreateRole(name.to_string()))?;
        if self.failing_role.as_deref() == Some(name) {
            return Ok(IdentityResult::failed(vec![IdentityError::new(
                "InvalidRoleName",
                format!("Role name '{}' is invalid.", name),
            )]));
        }
        self.inner.create_role(name).await
    }

    async fn assign_roles(&self, user: &User, roles: &[String]) -> Result<IdentityResult, AppError> {
        self.record(StoreCall::AssignRoles(user.email.clone(), roles.to_vec()))?;
        self.inner.assign_roles(user, roles).await
    }

    async fn get_roles(&self, user: &User) -> Result<Vec<String>, AppError> {
        self.record(StoreCall::GetRoles(user.email.clone()))?;
        self.inner.get_roles(user).await
    }

    async fn check_password(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        self.record(StoreCall::CheckPassword(email.to_string()))?;
        self.inner.check_password(email, password).await
    }
}
