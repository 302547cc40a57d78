//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 데이터베이스, 저장소 백엔드, 서버 바인딩, 비밀번호 해싱 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - 기본 관리자 비밀번호 등 필수 설정 누락 시 시작 실패
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::parse(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`, 기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름 (`DATABASE_NAME`, 기본값: "autoestate_identity_dev")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "autoestate_identity_dev".to_string())
    }
}

/// 자격 증명 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 영구 저장소
    Mongo,
    /// 프로세스 메모리 저장소 (로컬 개발용, 재시작 시 초기화됨)
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Mongo => "mongodb",
            StoreBackend::Memory => "memory",
        }
    }
}

/// 저장소 선택 설정
pub struct StoreConfig;

impl StoreConfig {
    /// `STORE_BACKEND` 값에 따라 백엔드를 선택합니다. `memory`가 아니면 MongoDB를 사용합니다.
    pub fn backend() -> StoreBackend {
        Self::backend_from(env::var("STORE_BACKEND").ok().as_deref())
    }

    pub fn backend_from(value: Option<&str>) -> StoreBackend {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "memory" || v == "in-memory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" DEV "), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_store_backend_selection() {
        assert_eq!(StoreConfig::backend_from(Some("memory")), StoreBackend::Memory);
        assert_eq!(StoreConfig::backend_from(Some("In-Memory")), StoreBackend::Memory);
        assert_eq!(StoreConfig::backend_from(Some("mongo")), StoreBackend::Mongo);
        assert_eq!(StoreConfig::backend_from(None), StoreBackend::Mongo);
    }
}
