//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 구조체로 중앙집중식 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 저장소 백엔드, 서버, bcrypt 설정
//! - [`identity_config`] - 비밀번호 정책, 부트스트랩(기본 역할/관리자) 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(기본 관리자 비밀번호)는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전하며, 프로덕션에서는 필수 값 누락 시 시작 실패
//! - 부트스트랩 설정은 정적이며 실행 중 변경되지 않음
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export STORE_BACKEND="mongo"         # mongo, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="autoestate_identity"
//! export BCRYPT_COST="12"              # 4-15 범위
//! export DEFAULT_ADMIN_PASSWORD="..."
//! ```

pub mod data_config;
pub mod identity_config;

pub use data_config::*;
pub use identity_config::*;
