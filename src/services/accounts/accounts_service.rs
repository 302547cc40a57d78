//! # 계정 프로비저닝 서비스
//!
//! 회원가입 요청으로 애플리케이션 사용자를 만들고, 자격 증명 저장은
//! 외부 저장소에 위임합니다. 저장소가 돌려준 여러 실패 사유는 하나의
//! 보고 가능한 에러 메시지로 합쳐집니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! RegisterRequest (Option)
//!        │
//!        ▼
//! ┌──────────────────┐   누락/공백 필드   ┌─────────────────────┐
//! │   입력 검증       │ ────────────────▶ │ ValidationError     │ (저장소 호출 0회)
//! └──────────────────┘                   └─────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────┐   실패 결과        ┌─────────────────────┐
//! │ create_account   │ ────────────────▶ │ IdentityCreationError│ (사유를 순서대로 결합)
//! └──────────────────┘                   └─────────────────────┘
//!        │ 성공
//!        ▼
//!      User
//! ```
//!
//! ## 동시성
//!
//! 서비스는 상태가 없으며 잠금을 사용하지 않습니다. 같은 이메일의 동시 가입은
//! 저장소의 원자적 생성에 의해 하나만 성공하고, 나머지는 중복 사유를 담은
//! `IdentityCreationError`를 받습니다.

use std::sync::Arc;
use std::time::Instant;

use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::entities::users::User;
use crate::domain::models::IdentityError;
use crate::repositories::CredentialStore;

const INVALID_DETAILS: &str = "Invalid details provided";
const INVALID_LOGIN: &str = "Invalid login attempt.";

/// 저장소 실패 사유들을 하나의 메시지로 합칩니다.
///
/// 각 설명 뒤에 공백 하나를 붙여 저장소가 돌려준 순서대로 이어 붙입니다.
/// 마지막 공백도 유지됩니다.
///
/// ```rust,ignore
/// // ["Passwords must be at least 6 characters.", "Email already taken."]
/// // → "Passwords must be at least 6 characters. Email already taken. "
/// ```
pub fn aggregate_errors(errors: &[IdentityError]) -> String {
    errors
        .iter()
        .map(|error| format!("{} ", error.description))
        .collect()
}

/// 사용자 계정 프로비저닝 서비스
///
/// 자격 증명 저장소는 생성자로 명시적으로 주입됩니다.
/// `Clone`이 가벼우므로 HTTP 워커마다 `web::Data`로 공유됩니다.
#[derive(Clone)]
pub struct AccountsService {
    store: Arc<dyn CredentialStore>,
}

impl AccountsService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// 회원가입 요청으로 새 사용자를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `request` - 회원가입 요청. 본문이 없거나 해석할 수 없으면 `None`
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (이메일 = 사용자명, 표시 이름 = 요청의 이름)
    /// * `Err(AppError::ValidationError)` - 요청이 없거나 필드 누락. 저장소는 호출되지 않음
    /// * `Err(AppError::IdentityCreationError)` - 저장소가 거부함. 모든 사유가 결합된 메시지
    /// * `Err(AppError::DatabaseError)` - 저장소 인프라 오류
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let request = RegisterRequest::new("jane@example.com", "secret1", "Jane Doe");
    /// let user = accounts.create_user(Some(request)).await?;
    /// assert_eq!(user.user_name, "jane@example.com");
    /// ```
    pub async fn create_user(&self, request: Option<RegisterRequest>) -> Result<User, AppError> {
        let start_time = Instant::now();

        let Some(request) = request else {
            log::warn!("회원가입 요청 본문 없음");
            return Err(AppError::ValidationError(INVALID_DETAILS.to_string()));
        };

        if let Err(errors) = request.validate() {
            log::warn!("회원가입 요청 검증 실패: {}", errors);
            return Err(AppError::ValidationError(INVALID_DETAILS.to_string()));
        }

        let Some((email, password, full_name)) = request.into_parts() else {
            return Err(AppError::ValidationError(INVALID_DETAILS.to_string()));
        };

        let user = User::new_registered(email, full_name);
        let result = self.store.create_account(&user, &password).await?;

        if !result.succeeded {
            let message = aggregate_errors(&result.errors);
            log::warn!("사용자 생성 거부 ({}): {}", user.email, message.trim_end());
            return Err(AppError::IdentityCreationError(message));
        }

        log::info!("✅ 사용자 생성 완료: {}", user.email);
        log::debug!("Total user creation took: {:?}", start_time.elapsed());

        Ok(user)
    }

    /// 이메일/비밀번호로 사용자를 인증합니다.
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 에러로 응답해
    /// 가입 여부가 드러나지 않도록 합니다.
    pub async fn authenticate(&self, request: Option<LoginRequest>) -> Result<User, AppError> {
        let Some((email, password)) = request
            .filter(|r| r.validate().is_ok())
            .and_then(LoginRequest::into_parts)
        else {
            return Err(AppError::ValidationError(INVALID_DETAILS.to_string()));
        };

        match self.store.check_password(&email, &password).await? {
            Some(user) => {
                log::info!("🔓 로그인 성공: {}", user.email);
                Ok(user)
            }
            None => {
                log::warn!("로그인 실패: {}", email);
                Err(AppError::AuthenticationError(INVALID_LOGIN.to_string()))
            }
        }
    }

    /// 사용자에게 부여된 역할 이름 목록
    pub async fn roles_for(&self, user: &User) -> Result<Vec<String>, AppError> {
        self.store.get_roles(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    use crate::config::PasswordPolicy;
    use crate::repositories::InMemoryCredentialStore;
    use crate::services::testing::{RecordingStore, StoreCall};

    fn service_with(store: &Arc<RecordingStore>) -> AccountsService {
        AccountsService::new(store.clone())
    }

    fn invalid_details() -> AppError {
        AppError::ValidationError("Invalid details provided".to_string())
    }

    #[test]
    fn test_aggregate_errors_joins_in_order_with_trailing_space() {
        let errors = vec![
            IdentityError::new("PasswordTooShort", "Passwords must be at least 6 characters."),
            IdentityError::new("DuplicateEmail", "Email already taken."),
        ];

        assert_eq!(
            aggregate_errors(&errors),
            "Passwords must be at least 6 characters. Email already taken. "
        );
        assert_eq!(aggregate_errors(&[]), "");
    }

    #[actix_web::test]
    async fn test_missing_request_fails_without_store_calls() {
        let store = Arc::new(RecordingStore::new());
        let result = service_with(&store).create_user(None).await;

        assert_eq!(result, Err(invalid_details()));
        assert!(store.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_incomplete_requests_fail_without_store_calls() {
        let store = Arc::new(RecordingStore::new());
        let service = service_with(&store);

        let incomplete = vec![
            RegisterRequest { email: None, ..RegisterRequest::new("", "secret1", "Jane") },
            RegisterRequest { password: None, ..RegisterRequest::new("jane@example.com", "", "Jane") },
            RegisterRequest { full_name: None, ..RegisterRequest::new("jane@example.com", "secret1", "") },
            RegisterRequest::new("   ", "secret1", "Jane"),
            RegisterRequest::new("jane@example.com", "", "Jane"),
            RegisterRequest::new("jane@example.com", "secret1", "  "),
            RegisterRequest::default(),
        ];

        for request in incomplete {
            assert_eq!(service.create_user(Some(request)).await, Err(invalid_details()));
        }
        assert!(store.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_successful_registration_returns_populated_user() {
        let store = Arc::new(RecordingStore::new());
        let user = service_with(&store)
            .create_user(Some(RegisterRequest::new("jane@example.com", "secret1", "Jane Doe")))
            .await
            .unwrap();

        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.user_name, "jane@example.com");
        assert_eq!(user.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(store.calls(), vec![StoreCall::CreateAccount("jane@example.com".to_string())]);
    }

    #[actix_web::test]
    async fn test_store_failures_are_aggregated() {
        let store = Arc::new(RecordingStore::new().with_account_errors(vec![
            IdentityError::new("PasswordTooShort", "Passwords must be at least 6 characters."),
            IdentityError::new("DuplicateEmail", "Email already taken."),
        ]));

        let result = service_with(&store)
            .create_user(Some(RegisterRequest::new("jane@example.com", "abc", "Jane Doe")))
            .await;

        assert_eq!(
            result,
            Err(AppError::IdentityCreationError(
                "Passwords must be at least 6 characters. Email already taken. ".to_string()
            ))
        );
        assert_eq!(store.creation_calls(), 1);
        assert!(store.inner().find_by_email("jane@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_policy_rejection_from_real_store() {
        let store = Arc::new(RecordingStore::new());
        let result = service_with(&store)
            .create_user(Some(RegisterRequest::new("not-an-email", "abc", "Jane Doe")))
            .await;

        assert_eq!(
            result,
            Err(AppError::IdentityCreationError(
                "Passwords must be at least 6 characters. Email 'not-an-email' is invalid. ".to_string()
            ))
        );
    }

    #[actix_web::test]
    async fn test_infrastructure_errors_propagate_unchanged() {
        let store = Arc::new(RecordingStore::unavailable());
        let result = service_with(&store)
            .create_user(Some(RegisterRequest::new("jane@example.com", "secret1", "Jane Doe")))
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_concurrent_registrations_with_same_email() {
        let store = Arc::new(InMemoryCredentialStore::new(PasswordPolicy::default(), 4));
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let service = AccountsService::new(store.clone());
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    actix_web::rt::System::new().block_on(service.create_user(Some(
                        RegisterRequest::new("race@example.com", "secret1", "Racer"),
                    )))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let failure = results.into_iter().find_map(Result::err).unwrap();
        match failure {
            AppError::IdentityCreationError(message) => assert!(message.contains("already taken")),
            other => panic!("Expected IdentityCreationError, got {:?}", other),
        }
        assert_eq!(store.user_count(), 1);
    }

    #[actix_web::test]
    async fn test_authenticate() {
        let store = Arc::new(RecordingStore::new());
        let service = service_with(&store);
        service
            .create_user(Some(RegisterRequest::new("jane@example.com", "secret1", "Jane Doe")))
            .await
            .unwrap();

        let user = service
            .authenticate(Some(LoginRequest::new("JANE@example.com", "secret1")))
            .await
            .unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert!(service.roles_for(&user).await.unwrap().is_empty());

        assert_eq!(
            service.authenticate(Some(LoginRequest::new("jane@example.com", "wrong!!"))).await,
            Err(AppError::AuthenticationError("Invalid login attempt.".to_string()))
        );
        assert_eq!(
            service.authenticate(Some(LoginRequest::new("ghost@example.com", "secret1"))).await,
            Err(AppError::AuthenticationError("Invalid login attempt.".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_authenticate_validates_before_store_call() {
        let store = Arc::new(RecordingStore::new());
        let service = service_with(&store);

        assert_eq!(service.authenticate(None).await, Err(invalid_details()));
        assert_eq!(
            service.authenticate(Some(LoginRequest::new("jane@example.com", ""))).await,
            Err(invalid_details())
        );
        assert!(store.calls().is_empty());
    }
}
