//! AutoEstate 계정 서비스 메인 애플리케이션
//!
//! 자격 증명 저장소를 준비하고 시작 부트스트랩(역할, 기본 관리자)을 완료한 뒤에만
//! Actix-web HTTP 서버를 구동합니다. 부트스트랩이 실패하면 서버를 열지 않고 종료합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use autoestate_identity::config::{
    BootstrapConfig, PasswordPolicy, PasswordPolicyConfig, ServerConfig, StoreBackend, StoreConfig,
};
use autoestate_identity::core::errors::{AppError, ErrorContext};
use autoestate_identity::db::Database;
use autoestate_identity::repositories::{CredentialStore, InMemoryCredentialStore, MongoCredentialStore};
use autoestate_identity::routes::configure_all_routes;
use autoestate_identity::services::{AccountsService, BootstrapService};
use autoestate_identity::utils::display_terminal::print_bootstrap_summary;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 AutoEstate 계정 서비스 시작중...");

    let store = match bootstrap().await {
        Ok(store) => store,
        Err(e) => {
            error!("❌ 부트스트랩 실패, 서버를 시작하지 않습니다: {}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    info!("✅ 부트스트랩이 성공적으로 완료되었습니다!");

    // HTTP 서버 시작
    start_http_server(AccountsService::new(store)).await
}

/// 저장소를 준비하고 역할/기본 관리자를 보장합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - 부트스트랩 설정 누락 (프로덕션 관리자 비밀번호 등)
/// * `AppError::BootstrapFailure` - MongoDB 연결 실패, 역할 또는 관리자 생성 실패
async fn bootstrap() -> Result<Arc<dyn CredentialStore>, AppError> {
    let bootstrap_config = BootstrapConfig::from_env()?;
    let policy = PasswordPolicyConfig::from_env();

    let store = initialize_store(policy)
        .await
        .bootstrap_context(|| "preparing credential store".to_string())?;

    let report = BootstrapService::new(store.clone())
        .run(&bootstrap_config)
        .await?;

    print_bootstrap_summary(
        &bootstrap_config.roles,
        &report.roles_created,
        &bootstrap_config.default_admin.email,
        report.admin_created,
    );

    Ok(store)
}

/// `STORE_BACKEND` 설정에 맞는 자격 증명 저장소를 생성합니다
///
/// MongoDB 백엔드는 연결 확인과 유일 인덱스 생성까지 마친 뒤 반환됩니다.
async fn initialize_store(policy: PasswordPolicy) -> Result<Arc<dyn CredentialStore>, AppError> {
    let backend = StoreConfig::backend();
    info!("🗄️ 자격 증명 저장소 백엔드: {}", backend.as_str());

    match backend {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::from_env().await?);

            let store = MongoCredentialStore::new(database, policy);
            store.ensure_indexes().await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            info!("🧠 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryCredentialStore::with_policy(policy)))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(accounts: AccountsService) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Accounts API: http://{}/api/v1/accounts", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let accounts = web::Data::new(accounts);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::JsonConfig::default().limit(16 * 1024))
            .app_data(accounts.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 알립니다
    println!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            println!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=autoestate_identity::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 매물 포털 프론트엔드 개발 서버와 자체 서버 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
