//! # MongoDB 자격 증명 저장소
//!
//! 사용자와 역할을 MongoDB 컬렉션에 저장하는 `CredentialStore` 구현체입니다.
//! 비밀번호는 bcrypt로 해싱되어 사용자 문서에만 저장됩니다.
//!
//! ## 컬렉션
//!
//! - **users**: `normalized_email`(unique), `normalized_user_name`(unique)
//! - **roles**: `normalized_name`(unique)
//!
//! ## 원자성
//!
//! 삽입 전 중복 조회는 친절한 실패 사유를 만들기 위한 것이고, 실제 유일성은
//! 유니크 인덱스가 보장합니다. 동시 요청이 사전 조회를 모두 통과하더라도
//! 두 번째 삽입은 중복 키 에러(11000)로 거부되어 `DuplicateEmail` 실패 결과가 됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::{hash, verify};
use chrono::Utc;
use mongodb::bson::{doc, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::config::{PasswordConfig, PasswordPolicy};
use crate::core::errors::{AppError, ErrorContext};
use crate::db::Database;
use crate::domain::entities::roles::Role;
use crate::domain::entities::users::User;
use crate::domain::models::{IdentityError, IdentityResult};
use crate::repositories::credential_store::CredentialStore;
use crate::repositories::identity_policy::validate_account;
use crate::utils::string_utils::normalize_key;

const USERS_COLLECTION: &str = "users";
const ROLES_COLLECTION: &str = "roles";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    user_name: String,
    normalized_user_name: String,
    email: String,
    normalized_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    email_confirmed: bool,
    phone_number_confirmed: bool,
    password_hash: String,
    #[serde(default)]
    roles: Vec<String>,
    created_at: DateTime,
}

impl UserDocument {
    fn from_user(user: &User, password_hash: String) -> Self {
        Self {
            id: user.id.clone(),
            user_name: user.user_name.clone(),
            normalized_user_name: user.normalized_user_name(),
            email: user.email.clone(),
            normalized_email: user.normalized_email(),
            full_name: user.full_name.clone(),
            phone_number: user.phone_number.clone(),
            email_confirmed: user.email_confirmed,
            phone_number_confirmed: user.phone_number_confirmed,
            password_hash,
            roles: Vec::new(),
            created_at: DateTime::from_millis(user.created_at.timestamp_millis()),
        }
    }

    fn into_user(self) -> User {
        User {
            id: self.id,
            user_name: self.user_name,
            email: self.email,
            full_name: self.full_name,
            phone_number: self.phone_number,
            email_confirmed: self.email_confirmed,
            phone_number_confirmed: self.phone_number_confirmed,
            created_at: chrono::DateTime::from_timestamp_millis(self.created_at.timestamp_millis())
                .unwrap_or_else(Utc::now),
        }
    }
}

/// `roles` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoleDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    normalized_name: String,
}

impl From<Role> for RoleDocument {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            normalized_name: role.normalized_name,
        }
    }
}

fn db_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 사용자 삽입 결과를 저장소 결과로 변환합니다.
///
/// 사전 조회를 통과한 동시 요청은 유니크 인덱스에서 거부되며, 이 경우를
/// 인프라 오류가 아닌 `DuplicateEmail` 실패 결과로 돌려줍니다.
fn account_insert_outcome(
    inserted: mongodb::error::Result<()>,
    user: &User,
) -> Result<IdentityResult, AppError> {
    match inserted {
        Ok(()) => Ok(IdentityResult::success()),
        Err(e) if is_duplicate_key(&e) => {
            log::warn!("동시 가입 경합으로 중복 키 거부: {}", user.email);
            Ok(IdentityResult::failed(vec![IdentityError::duplicate_email(&user.email)]))
        }
        Err(e) => Err(db_error(e)),
    }
}

/// MongoDB 기반 자격 증명 저장소
pub struct MongoCredentialStore {
    db: Arc<Database>,
    policy: PasswordPolicy,
    bcrypt_cost: u32,
}

impl MongoCredentialStore {
    pub fn new(db: Arc<Database>, policy: PasswordPolicy) -> Self {
        Self {
            db,
            policy,
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
        }
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.get_database().collection(USERS_COLLECTION)
    }

    fn roles(&self) -> Collection<RoleDocument> {
        self.db.get_database().collection(ROLES_COLLECTION)
    }

    /// 유일성을 보장하는 인덱스를 생성합니다.
    ///
    /// 부트스트랩보다 먼저, 시작 시 한 번 호출해야 합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let unique = |name: &str| IndexOptions::builder().unique(true).name(name.to_string()).build();

        let email_index = IndexModel::builder()
            .keys(doc! { "normalized_email": 1 })
            .options(unique("normalized_email_unique"))
            .build();

        let user_name_index = IndexModel::builder()
            .keys(doc! { "normalized_user_name": 1 })
            .options(unique("normalized_user_name_unique"))
            .build();

        let role_name_index = IndexModel::builder()
            .keys(doc! { "normalized_name": 1 })
            .options(unique("normalized_name_unique"))
            .build();

        self.users()
            .create_indexes([email_index, user_name_index])
            .await
            .map_err(db_error)?;

        self.roles()
            .create_index(role_name_index)
            .await
            .map_err(db_error)?;

        log::info!("✅ 자격 증명 저장소 인덱스 확인 완료: {}", self.db.database_name());
        Ok(())
    }

    async fn find_document(&self, email: &str) -> Result<Option<UserDocument>, AppError> {
        self.users()
            .find_one(doc! { "normalized_email": normalize_key(email) })
            .await
            .map_err(db_error)
    }

    async fn find_role(&self, name: &str) -> Result<Option<RoleDocument>, AppError> {
        self.roles()
            .find_one(doc! { "normalized_name": normalize_key(name) })
            .await
            .map_err(db_error)
    }
}

#[async_trait]
impl CredentialStore for MongoCredentialStore {
    async fn create_account(&self, user: &User, password: &str) -> Result<IdentityResult, AppError> {
        let errors = validate_account(&self.policy, user, password);
        if !errors.is_empty() {
            return Ok(IdentityResult::failed(errors));
        }

        let mut errors = Vec::new();
        let user_name_taken = self
            .users()
            .find_one(doc! { "normalized_user_name": user.normalized_user_name() })
            .await
            .map_err(db_error)?
            .is_some();
        if user_name_taken {
            errors.push(IdentityError::duplicate_user_name(&user.user_name));
        }
        if self.find_document(&user.email).await?.is_some() {
            errors.push(IdentityError::duplicate_email(&user.email));
        }
        if !errors.is_empty() {
            return Ok(IdentityResult::failed(errors));
        }

        let password_hash = hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        let document = UserDocument::from_user(user, password_hash);

        let inserted = self.users().insert_one(&document).await.map(|_| ());
        account_insert_outcome(inserted, user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_document(email).await?.map(UserDocument::into_user))
    }

    async fn role_exists(&self, name: &str) -> Result<bool, AppError> {
        let count = self
            .roles()
            .count_documents(doc! { "normalized_name": normalize_key(name) })
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn create_role(&self, name: &str) -> Result<IdentityResult, AppError> {
        let role = Role::new(name);
        let role_name = role.name.clone();

        match self.roles().insert_one(RoleDocument::from(role)).await {
            Ok(_) => Ok(IdentityResult::success()),
            Err(e) if is_duplicate_key(&e) => Ok(IdentityResult::failed(vec![
                IdentityError::duplicate_role_name(&role_name),
            ])),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn assign_roles(&self, user: &User, roles: &[String]) -> Result<IdentityResult, AppError> {
        let mut errors = Vec::new();
        let mut resolved = Vec::with_capacity(roles.len());
        for name in roles {
            match self.find_role(name).await? {
                Some(role) if resolved.iter().any(|r: &String| r.eq_ignore_ascii_case(&role.name)) => {}
                Some(role) => resolved.push(role.name),
                None => errors.push(IdentityError::role_not_found(name)),
            }
        }

        let Some(document) = self.find_document(&user.email).await? else {
            return Ok(IdentityResult::failed(vec![IdentityError::user_not_found(&user.email)]));
        };

        for name in &resolved {
            if document.roles.iter().any(|r| r.eq_ignore_ascii_case(name)) {
                errors.push(IdentityError::user_already_in_role(name));
            }
        }
        if !errors.is_empty() {
            return Ok(IdentityResult::failed(errors));
        }

        self.users()
            .update_one(
                doc! { "_id": document.id.as_str() },
                doc! { "$addToSet": { "roles": { "$each": resolved } } },
            )
            .await
            .map_err(db_error)?;

        Ok(IdentityResult::success())
    }

    async fn get_roles(&self, user: &User) -> Result<Vec<String>, AppError> {
        Ok(self
            .find_document(&user.email)
            .await?
            .map(|document| document.roles)
            .unwrap_or_default())
    }

    async fn check_password(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let Some(document) = self.find_document(email).await? else {
            return Ok(None);
        };

        let matches = verify(password, &document.password_hash).context("비밀번호 검증 실패")?;
        Ok(matches.then(|| document.into_user()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::error::WriteError;

    fn write_error(code: i32) -> mongodb::error::Error {
        let write_error: WriteError = mongodb::bson::from_document(doc! {
            "code": code,
            "codeName": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: users index: normalized_email_unique",
        })
        .unwrap();

        mongodb::error::Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_duplicate_key_insert_becomes_duplicate_email() {
        let user = User::new_registered("jane@example.com".to_string(), "Jane".to_string());

        assert!(is_duplicate_key(&write_error(11000)));

        let result = account_insert_outcome(Err(write_error(11000)), &user).unwrap();
        assert!(!result.succeeded);
        assert_eq!(result.errors, vec![IdentityError::duplicate_email("jane@example.com")]);
    }

    #[test]
    fn test_other_write_errors_stay_database_errors() {
        let user = User::new_registered("jane@example.com".to_string(), "Jane".to_string());

        assert!(!is_duplicate_key(&write_error(121)));
        assert!(matches!(
            account_insert_outcome(Err(write_error(121)), &user),
            Err(AppError::DatabaseError(_))
        ));
        assert!(account_insert_outcome(Ok(()), &user).unwrap().succeeded);
    }

    #[test]
    fn test_user_document_normalizes_keys_and_round_trips() {
        let user = User::new_administrator(
            "Admin@AutoEstate.com".to_string(),
            Some("+15550100".to_string()),
        );
        let document = UserDocument::from_user(&user, "$2b$04$hash".to_string());

        assert_eq!(document.normalized_email, "ADMIN@AUTOESTATE.COM");
        assert_eq!(document.normalized_user_name, "ADMIN@AUTOESTATE.COM");
        assert!(document.roles.is_empty());

        let restored = document.into_user();
        assert_eq!(restored.id, user.id);
        assert_eq!(restored.email, user.email);
        assert_eq!(restored.phone_number, user.phone_number);
        assert_eq!(restored.created_at.timestamp_millis(), user.created_at.timestamp_millis());
    }

    #[test]
    fn test_password_hash_is_not_part_of_user() {
        let user = User::new_registered("jane@example.com".to_string(), "Jane".to_string());
        let document = UserDocument::from_user(&user, "$2b$04$hash".to_string());
        let json = serde_json::to_string(&document.into_user()).unwrap();

        assert!(!json.contains("$2b$04$hash"));
    }
}
