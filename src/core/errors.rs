//! # Application Error Handling System
//!
//! 계정 프로비저닝과 부트스트랩 과정에서 발생하는 모든 에러를 하나의
//! 태그된 열거형으로 표현합니다. 호출자는 메시지 문자열을 파싱하지 않고
//! 변형(variant)만으로 복구 가능 여부를 판단할 수 있습니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 지점 | HTTP | 복구 |
//! |------|-----------|------|------|
//! | `ValidationError` | 입력 검증 (저장소 호출 전) | 400 | 재입력 |
//! | `IdentityCreationError` | 저장소가 계정 생성을 거부 | 422 | 입력 수정 후 재시도 |
//! | `AuthenticationError` | 로그인 실패 | 401 | 재시도 |
//! | `BootstrapFailure` | 시작 시 역할/관리자 생성 실패 | 500 | 불가 (프로세스 중단) |
//! | `DatabaseError` | 저장소 인프라 오류 | 500 | 불가 |
//! | `ConfigError` | 설정 누락/오류 | 500 | 불가 (프로세스 중단) |
//! | `InternalError` | 기타 내부 오류 | 500 | 불가 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! match accounts.create_user(Some(request)).await {
//!     Ok(user) => info!("가입 완료: {}", user.email),
//!     Err(AppError::IdentityCreationError(reasons)) => warn!("가입 거부: {}", reasons),
//!     Err(e) => return Err(e),
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 자격 증명 저장소가 계정 생성을 거부함 (422 Unprocessable Entity)
    ///
    /// 저장소가 돌려준 모든 실패 사유가 순서대로 이어 붙여진 메시지를 담습니다.
    #[error("Identity creation error: {0}")]
    IdentityCreationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 시작 시 보안 기준선(역할, 기본 관리자) 구성 실패
    #[error("Bootstrap failure: {0}")]
    BootstrapFailure(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프로세스를 계속 실행할 수 없는 에러인지 여부
    ///
    /// 부트스트랩 실패와 설정 에러는 운영자 개입이 필요하므로 치명적입니다.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::BootstrapFailure(_) | AppError::ConfigError(_))
    }

    /// 호출자(최종 사용자)가 입력을 고쳐 다시 시도할 수 있는 에러인지 여부
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_)
                | AppError::IdentityCreationError(_)
                | AppError::AuthenticationError(_)
        )
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::IdentityCreationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 인프라 에러의 상세 내용은 로그에만 남기고 응답에는 노출하지 않습니다.
    fn error_response(&self) -> HttpResponse {
        let message = if self.is_recoverable() {
            self.to_string()
        } else {
            log::error!("요청 처리 중 내부 에러: {}", self);
            "Internal server error".to_string()
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 내부 에러로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저로 지연 평가된 컨텍스트를 붙여 부트스트랩 실패로 변환합니다.
    fn bootstrap_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn bootstrap_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::BootstrapFailure(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Invalid details provided".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_identity_creation_error_response() {
        let error = AppError::IdentityCreationError("Email 'a@b.com' is already taken. ".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid login attempt.".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_infrastructure_errors_map_to_500() {
        for error in [
            AppError::BootstrapFailure("roles".to_string()),
            AppError::DatabaseError("connection refused".to_string()),
            AppError::ConfigError("missing".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_fatal_and_recoverable_classification() {
        assert!(AppError::BootstrapFailure("x".to_string()).is_fatal());
        assert!(AppError::ConfigError("x".to_string()).is_fatal());
        assert!(!AppError::ValidationError("x".to_string()).is_fatal());

        assert!(AppError::ValidationError("x".to_string()).is_recoverable());
        assert!(AppError::IdentityCreationError("x".to_string()).is_recoverable());
        assert!(!AppError::DatabaseError("x".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_bootstrap_context_wraps_as_fatal() {
        let result: Result<(), &str> = Err("duplicate key");
        let app_result = result.bootstrap_context(|| "creating role 'Agent'".to_string());

        assert_eq!(
            app_result,
            Err(AppError::BootstrapFailure("creating role 'Agent': duplicate key".to_string()))
        );
    }
}
