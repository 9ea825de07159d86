//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 토큰 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! - [`TokenError`] - 토큰 서명 시점의 설정/직렬화 오류. 시크릿 누락은
//!   배포 설정 문제이므로 잡지 않고 그대로 전파합니다.
//! - [`AppError`] - HTTP 응답으로 변환되는 요청 단위 에러
//!
//! 토큰 검증 실패(서명 불일치, 형식 오류, 만료)는 에러가 아니라
//! `None`으로 표현되며, 핸들러에서 일반적인 401 응답으로 바뀝니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! fn current_user(service: &TokenService, token: &str) -> AppResult<AccessClaims> {
//!     service
//!         .verify_access_token(token)
//!         .ok_or_else(|| AppError::AuthenticationError("Invalid token".to_string()))
//! }
//! ```

use thiserror::Error;

/// 토큰 서명 에러
///
/// 서명(발급) 과정에서만 발생합니다. 검증 과정은 이 타입을 사용하지 않습니다.
#[derive(Error, Debug)]
pub enum TokenError {
    /// 서명 시크릿이 비어 있거나 공백뿐임 (배포 설정 오류)
    #[error("token secret is required but not set (JWT_SECRET)")]
    MissingSecret,

    /// 클레임이 JSON 객체로 직렬화되지 않음
    #[error("claims must serialize to a JSON object")]
    InvalidClaims,

    /// 클레임 직렬화 실패
    #[error("claims serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        log::error!("토큰 발급 실패: {}", err);
        AppError::InternalError(err.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 에러의 상세 내용은 로그에만 남기고 응답에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match self {
            AppError::InternalError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
