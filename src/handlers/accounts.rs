//! # Account HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트입니다. 두 핸들러 모두 인증 없이 접근 가능하며,
//! 비즈니스 규칙은 [`AccountsService`]에 위임합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/accounts/register` | 새 사용자 생성 | 201 Created |
//! | `POST` | `/api/v1/accounts/login` | 이메일/비밀번호 로그인 | 200 OK |
//!
//! 본문을 JSON으로 해석할 수 없으면 `None`으로 서비스에 전달되어
//! `400 Bad Request`가 됩니다.

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{CreateUserResponse, LoginResponse, UserResponse};
use crate::services::accounts::AccountsService;

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "password": "secret1",
///   "full_name": "Jane Doe"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "user": {
///     "id": "0b9d7c1e-...",
///     "user_name": "jane@example.com",
///     "email": "jane@example.com",
///     "full_name": "Jane Doe",
///     "phone_number": null,
///     "email_confirmed": false,
///     "phone_number_confirmed": false,
///     "roles": [],
///     "created_at": "2024-01-01T00:00:00Z"
///   },
///   "message": "User created successfully"
/// }
/// ```
///
/// ## 필드 누락 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Invalid details provided" }
/// ```
///
/// ## 저장소 거부 (422 Unprocessable Entity)
/// ```json
/// { "error": "Identity creation error: Passwords must be at least 6 characters. Email 'jane@example.com' is already taken. " }
/// ```
#[post("/register")]
pub async fn register(
    accounts: web::Data<AccountsService>,
    payload: Option<web::Json<RegisterRequest>>,
) -> Result<HttpResponse, AppError> {
    let user = accounts
        .create_user(payload.map(web::Json::into_inner))
        .await?;

    Ok(HttpResponse::Created().json(CreateUserResponse {
        user: UserResponse::from(user),
        message: "User created successfully".to_string(),
    }))
}

/// 로그인 핸들러
///
/// 성공 시 사용자 정보와 부여된 역할을 반환합니다.
/// 이메일이 없거나 비밀번호가 틀리면 같은 `401` 응답을 돌려줍니다.
#[post("/login")]
pub async fn login(
    accounts: web::Data<AccountsService>,
    payload: Option<web::Json<LoginRequest>>,
) -> Result<HttpResponse, AppError> {
    let user = accounts
        .authenticate(payload.map(web::Json::into_inner))
        .await?;
    let roles = accounts.roles_for(&user).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        user: UserResponse::with_roles(user, roles),
        message: "Login successful".to_string(),
    }))
}
