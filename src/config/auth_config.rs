//! # Authentication Configuration Module
//!
//! 토큰 서명 시크릿과 인증 쿠키 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export COOKIE_SECURE="true"   # 기본값: development/test 외에는 true
//! ```
//!
//! 토큰 수명(액세스 15분, 리프레시 7일)은 정책 상수이므로 환경 변수로
//! 바꿀 수 없습니다. [`crate::services::auth::token_codec`]를 참고하세요.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{CookieConfig, JwtConfig};
//!
//! let secret = JwtConfig::secret();
//! let secure = CookieConfig::secure();
//! ```

use std::env;

use crate::config::Environment;

/// 토큰 서명 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명 시크릿을 반환합니다.
    ///
    /// 설정되지 않은 경우 빈 문자열을 반환하며, 빈 시크릿은
    /// [`crate::services::auth::TokenService::new`]에서 거부되어
    /// 서버 시작이 중단됩니다.
    ///
    /// # 보안 주의사항
    ///
    /// - 이 값을 로그에 출력하지 마세요
    /// - 환경 변수나 보안 저장소에만 저장하세요
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_default()
    }
}

/// 인증 쿠키 설정
///
/// 액세스 토큰은 `auth_token`, 리프레시 토큰은 `refresh_token` 쿠키에 담기며
/// 둘 다 `HttpOnly`, `SameSite=Lax`, `Path=/` 입니다.
pub struct CookieConfig;

impl CookieConfig {
    /// 액세스 토큰 쿠키 이름
    pub const ACCESS_COOKIE: &'static str = "auth_token";

    /// 리프레시 토큰 쿠키 이름
    pub const REFRESH_COOKIE: &'static str = "refresh_token";

    /// 쿠키에 `Secure` 속성을 붙일지 여부를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `COOKIE_SECURE`: `true`/`false`/`1`/`0`
    ///
    /// 설정되지 않았거나 해석할 수 없는 값이면 현재 환경의 기본값을 사용합니다.
    pub fn secure() -> bool {
        env::var("COOKIE_SECURE")
            .ok()
            .and_then(|value| parse_bool(&value))
            .unwrap_or_else(|| Self::secure_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 `Secure` 기본값을 반환합니다.
    ///
    /// - Development/Test: false (http://localhost)
    /// - Staging/Production: true
    pub fn secure_for_env(env: &Environment) -> bool {
        !matches!(env, Environment::Development | Environment::Test)
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    ///
    /// 기본값은 로컬 개발 서버 주소들입니다.
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
            "http://localhost:3000,http://127.0.0.1:3000".to_string()
        });
        parse_origins(&raw)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
