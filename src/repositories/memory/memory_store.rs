//! # 메모리 자격 증명 저장소
//!
//! 프로세스 메모리에 사용자와 역할을 보관하는 `CredentialStore` 구현체입니다.
//! 로컬 개발(`STORE_BACKEND=memory`)과 테스트에서 사용되며, 재시작 시 모든 데이터가 사라집니다.
//!
//! ## 원자성
//!
//! bcrypt 해싱은 잠금 밖에서 먼저 수행하고, 중복 확인과 삽입은 하나의 쓰기 잠금
//! 안에서 처리합니다. 따라서 같은 이메일의 동시 생성 요청 중 정확히 하나만 성공합니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::config::{PasswordConfig, PasswordPolicy};
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::entities::roles::Role;
use crate::domain::entities::users::User;
use crate::domain::models::{IdentityError, IdentityResult};
use crate::repositories::credential_store::CredentialStore;
use crate::repositories::identity_policy::validate_account;
use crate::utils::string_utils::normalize_key;

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
    roles: Vec<String>,
}

#[derive(Debug, Default)]
struct MemoryState {
    /// 정규화 이메일 → 사용자
    users: HashMap<String, StoredUser>,
    /// 정규화 역할 이름 → 역할
    roles: HashMap<String, Role>,
}

/// 메모리 기반 자격 증명 저장소
#[derive(Debug)]
pub struct InMemoryCredentialStore {
    state: RwLock<MemoryState>,
    policy: PasswordPolicy,
    bcrypt_cost: u32,
}

impl InMemoryCredentialStore {
    pub fn new(policy: PasswordPolicy, bcrypt_cost: u32) -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
            policy,
            bcrypt_cost,
        }
    }

    /// 환경별 bcrypt cost를 사용하는 저장소
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self::new(policy, PasswordConfig::bcrypt_cost())
    }

    #[cfg(test)]
    pub fn user_count(&self) -> usize {
        self.read().map(|state| state.users.len()).unwrap_or_default()
    }

    /// 저장된 역할 이름 목록 (이름순)
    #[cfg(test)]
    pub fn role_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .read()
            .map(|state| state.roles.values().map(|r| r.name.clone()).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>, AppError> {
        self.state
            .read()
            .map_err(|_| AppError::InternalError("credential store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>, AppError> {
        self.state
            .write()
            .map_err(|_| AppError::InternalError("credential store lock poisoned".to_string()))
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create_account(&self, user: &User, password: &str) -> Result<IdentityResult, AppError> {
        let errors = validate_account(&self.policy, user, password);
        if !errors.is_empty() {
            return Ok(IdentityResult::failed(errors));
        }

        let password_hash = hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        let mut state = self.write()?;
        let normalized_email = user.normalized_email();
        let normalized_user_name = user.normalized_user_name();

        let mut errors = Vec::new();
        if state
            .users
            .values()
            .any(|stored| stored.user.normalized_user_name() == normalized_user_name)
        {
            errors.push(IdentityError::duplicate_user_name(&user.user_name));
        }
        if state.users.contains_key(&normalized_email) {
            errors.push(IdentityError::duplicate_email(&user.email));
        }
        if !errors.is_empty() {
            return Ok(IdentityResult::failed(errors));
        }

        state.users.insert(
            normalized_email,
            StoredUser {
                user: user.clone(),
                password_hash,
                roles: Vec::new(),
            },
        );

        Ok(IdentityResult::success())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let state = self.read()?;
        Ok(state.users.get(&normalize_key(email)).map(|stored| stored.user.clone()))
    }

    async fn role_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.read()?.roles.contains_key(&normalize_key(name)))
    }

    async fn create_role(&self, name: &str) -> Result<IdentityResult, AppError> {
        let role = Role::new(name);
        let mut state = self.write()?;

        if state.roles.contains_key(&role.normalized_name) {
            return Ok(IdentityResult::failed(vec![IdentityError::duplicate_role_name(&role.name)]));
        }

        state.roles.insert(role.normalized_name.clone(), role);
        Ok(IdentityResult::success())
    }

    async fn assign_roles(&self, user: &User, roles: &[String]) -> Result<IdentityResult, AppError> {
        let mut state = self.write()?;

        let mut resolved = Vec::with_capacity(roles.len());
        let mut errors = Vec::new();
        for name in roles {
            match state.roles.get(&normalize_key(name)) {
                Some(role) if resolved.iter().any(|r: &String| r.eq_ignore_ascii_case(&role.name)) => {}
                Some(role) => resolved.push(role.name.clone()),
                None => errors.push(IdentityError::role_not_found(name)),
            }
        }

        let Some(stored) = state.users.get_mut(&user.normalized_email()) else {
            return Ok(IdentityResult::failed(vec![IdentityError::user_not_found(&user.email)]));
        };

        for name in &resolved {
            if stored.roles.iter().any(|r| r.eq_ignore_ascii_case(name)) {
                errors.push(IdentityError::user_already_in_role(name));
            }
        }
        if !errors.is_empty() {
            return Ok(IdentityResult::failed(errors));
        }

        stored.roles.extend(resolved);
        Ok(IdentityResult::success())
    }

    async fn get_roles(&self, user: &User) -> Result<Vec<String>, AppError> {
        let state = self.read()?;
        Ok(state
            .users
            .get(&user.normalized_email())
            .map(|stored| stored.roles.clone())
            .unwrap_or_default())
    }

    async fn check_password(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let Some(stored) = self.read()?.users.get(&normalize_key(email)).cloned() else {
            return Ok(None);
        };

        let matches = verify(password, &stored.password_hash).context("비밀번호 검증 실패")?;
        Ok(matches.then_some(stored.user))
    }
}
