//! API 라우트 설정 모듈
//!
//! 헬스체크와 계정 관련 엔드포인트를 애플리케이션에 등록합니다.
//! 계정 라우트는 회원가입/로그인 자체이므로 인증 없이 접근 가능합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(accounts_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_account_routes(cfg);
}

/// 계정 관련 라우트를 설정합니다
///
/// - `POST /api/v1/accounts/register` - 회원가입
/// - `POST /api/v1/accounts/login` - 이메일/비밀번호 로그인
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/accounts/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"jane@example.com","password":"secret1","full_name":"Jane Doe"}'
/// ```
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .service(handlers::accounts::register)
            .service(handlers::accounts::login),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "autoestate_identity",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
