//! # Identity Configuration Module
//!
//! 비밀번호 정책과 시작 시 부트스트랩(기본 역할, 기본 관리자 계정) 설정을 관리합니다.
//! 두 설정 모두 프로세스 시작 시 한 번 읽히며, 실행 중에는 변경되지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 비밀번호 정책
//! export PASSWORD_REQUIRED_LENGTH="6"
//! export PASSWORD_REQUIRE_DIGIT="false"
//! export PASSWORD_REQUIRE_LOWERCASE="false"
//! export PASSWORD_REQUIRE_UPPERCASE="false"
//! export PASSWORD_REQUIRE_NON_ALPHANUMERIC="false"
//!
//! # 부트스트랩
//! export BOOTSTRAP_ROLES="SystemAdministrator,Agent,User"
//! export DEFAULT_ADMIN_EMAIL="admin@autoestate.com"
//! export DEFAULT_ADMIN_PASSWORD="..."      # 프로덕션에서는 필수
//! export DEFAULT_ADMIN_PHONE="+15550100"   # 선택
//! ```
//!
//! 테스트에서 프로세스 환경 변수를 건드리지 않도록 `from_lookup` 계열 함수는
//! 조회 함수를 주입받습니다.

use std::env;
use std::fmt;

use crate::config::Environment;
use crate::core::errors::AppError;
use crate::utils::string_utils::clean_optional_string;

pub const DEFAULT_ROLES: [&str; 3] = ["SystemAdministrator", "Agent", "User"];
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@autoestate.com";
const DEVELOPMENT_ADMIN_PASSWORD: &str = "SuperSecretPassword@2020";

/// 자격 증명 저장소가 계정 생성 시 적용하는 비밀번호 정책
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub required_length: usize,
    pub require_digit: bool,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_non_alphanumeric: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            required_length: 6,
            require_digit: false,
            require_lowercase: false,
            require_uppercase: false,
            require_non_alphanumeric: false,
        }
    }
}

/// 비밀번호 정책 설정 로더
pub struct PasswordPolicyConfig;

impl PasswordPolicyConfig {
    pub fn from_env() -> PasswordPolicy {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 파싱할 수 없는 값은 경고를 남기고 기본값으로 대체합니다.
    pub fn from_lookup<F>(lookup: F) -> PasswordPolicy
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PasswordPolicy::default();

        PasswordPolicy {
            required_length: parse_or(&lookup, "PASSWORD_REQUIRED_LENGTH", defaults.required_length),
            require_digit: parse_or(&lookup, "PASSWORD_REQUIRE_DIGIT", defaults.require_digit),
            require_lowercase: parse_or(&lookup, "PASSWORD_REQUIRE_LOWERCASE", defaults.require_lowercase),
            require_uppercase: parse_or(&lookup, "PASSWORD_REQUIRE_UPPERCASE", defaults.require_uppercase),
            require_non_alphanumeric: parse_or(
                &lookup,
                "PASSWORD_REQUIRE_NON_ALPHANUMERIC",
                defaults.require_non_alphanumeric,
            ),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패: '{}'. 기본값 사용", key, raw);
            default
        }),
        None => default,
    }
}

/// 기본 관리자 계정 정보
#[derive(Clone, PartialEq, Eq)]
pub struct DefaultAdmin {
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

// 비밀번호가 로그에 남지 않도록 직접 구현
impl fmt::Debug for DefaultAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultAdmin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// 시작 시 부트스트랩 설정
///
/// 역할 목록의 순서는 생성 순서이자 기본 관리자에게 부여되는 순서입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub roles: Vec<String>,
    pub default_admin: DefaultAdmin,
}

impl BootstrapConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&Environment::current(), |key| env::var(key).ok())
    }

    /// 조회 함수로부터 부트스트랩 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 역할 목록이 비었거나, 프로덕션에서
    ///   `DEFAULT_ADMIN_PASSWORD`가 설정되지 않은 경우
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roles = match lookup("BOOTSTRAP_ROLES") {
            Some(raw) => parse_role_list(&raw),
            None => DEFAULT_ROLES.iter().map(|role| role.to_string()).collect(),
        };

        if roles.is_empty() {
            return Err(AppError::ConfigError(
                "BOOTSTRAP_ROLES must name at least one role".to_string(),
            ));
        }

        let email = clean_optional_string(lookup("DEFAULT_ADMIN_EMAIL"))
            .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string());

        let password = match lookup("DEFAULT_ADMIN_PASSWORD").filter(|p| !p.is_empty()) {
            Some(password) => password,
            None if environment.is_production() => {
                return Err(AppError::ConfigError(
                    "DEFAULT_ADMIN_PASSWORD must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("⚠️ DEFAULT_ADMIN_PASSWORD 미설정: 개발용 기본 비밀번호 사용");
                DEVELOPMENT_ADMIN_PASSWORD.to_string()
            }
        };

        Ok(Self {
            roles,
            default_admin: DefaultAdmin {
                email,
                password,
                phone_number: clean_optional_string(lookup("DEFAULT_ADMIN_PHONE")),
            },
        })
    }
}

/// 쉼표로 구분된 역할 목록을 파싱합니다. 빈 항목은 버리고 중복은 처음 것만 남깁니다.
fn parse_role_list(raw: &str) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();

    for role in raw.split(',').map(str::trim).filter(|r| !r.is_empty()) {
        if !roles.iter().any(|existing| existing.eq_ignore_ascii_case(role)) {
            roles.push(role.to_string());
        }
    }

    roles
}
