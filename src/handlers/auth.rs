//! Authentication HTTP Handlers
//!
//! 토큰 세션과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 토큰은 `HttpOnly` 쿠키로 주고받고, 쿠키가 없는 클라이언트를 위해
//! Bearer 헤더와 JSON 본문을 대체 경로로 허용합니다.
//!
//! # Endpoints
//!
//! - **세션 검증**: `POST /auth/verify`
//! - **토큰 갱신**: `POST /auth/refresh`
//! - **로그아웃**: `POST /auth/logout`
//! - **세션 조회**: `GET /auth/session`
//! - **현재 사용자**: `GET /me`
//!
//! 실패 응답은 사유와 관계없이 항상 `{"authenticated":false,"error":"Invalid token"}` 입니다.
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use crate::config::CookieConfig;
use crate::domain::auth::authenticated_user::{AuthenticatedUser, OptionalUser};
use crate::domain::dto::{RefreshRequest, RefreshResponse, SessionResponse, VerifyRequest};
use crate::errors::errors::AppError;
use crate::middlewares::extract_access_token;
use crate::services::auth::token_codec::ACCESS_TOKEN_TTL_SECS;
use crate::services::auth::TokenService;
use crate::utils::cookies::{access_cookie, clear_access_cookie, clear_refresh_cookie, read_cookie};

/// 세션 검증 핸들러
///
/// `auth_token` 쿠키, Bearer 헤더, 본문 `{"token": ...}` 순서로 토큰을 찾습니다.
///
/// # Endpoint
/// `POST /auth/verify`
#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
    payload: Option<web::Json<VerifyRequest>>,
) -> HttpResponse {
    let token = extract_access_token(&req, &token_service)
        .or_else(|| payload.as_ref().and_then(|p| p.token().map(str::to_string)));

    let user = token
        .as_deref()
        .and_then(|token| token_service.verify_access_token(token))
        .map(AuthenticatedUser::from);

    match user {
        Some(user) => {
            log::debug!("세션 검증 성공 - 사용자: {:?}", user.user_id());
            HttpResponse::Ok().json(SessionResponse::authenticated(user))
        }
        None => {
            log::debug!("세션 검증 실패");
            HttpResponse::Unauthorized().json(SessionResponse::invalid())
        }
    }
}

/// 토큰 갱신 핸들러
///
/// 유효한 리프레시 토큰으로 새 액세스 토큰을 발급하고 `auth_token` 쿠키에 담습니다.
/// 리프레시 토큰 자체는 교체하지 않습니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
    payload: Option<web::Json<RefreshRequest>>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = read_cookie(&req, CookieConfig::REFRESH_COOKIE)
        .or_else(|| payload.as_ref().and_then(|p| p.refresh_token().map(str::to_string)));

    let Some(refresh_token) = refresh_token else {
        return Ok(HttpResponse::Unauthorized().json(SessionResponse::invalid()));
    };

    let access_token = match token_service.refresh_access_token(&refresh_token) {
        Ok(token) => token,
        Err(AppError::AuthenticationError(_)) => {
            log::debug!("토큰 갱신 실패: 유효하지 않은 리프레시 토큰");
            return Ok(HttpResponse::Unauthorized().json(SessionResponse::invalid()));
        }
        Err(e) => return Err(e),
    };

    log::info!("액세스 토큰 갱신 완료");

    Ok(HttpResponse::Ok()
        .cookie(access_cookie(&access_token, CookieConfig::secure()))
        .json(RefreshResponse {
            authenticated: true,
            expires_in: ACCESS_TOKEN_TTL_SECS,
        }))
}

/// 로그아웃 핸들러
///
/// 두 인증 쿠키를 즉시 만료시킵니다. 서버 측에 저장된 세션은 없습니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    let secure = CookieConfig::secure();

    HttpResponse::Ok()
        .cookie(clear_access_cookie(secure))
        .cookie(clear_refresh_cookie(secure))
        .json(SessionResponse::anonymous())
}

/// 세션 조회 핸들러 (선택적 인증)
///
/// # Endpoint
/// `GET /auth/session`
#[get("")]
pub async fn session(user: OptionalUser) -> HttpResponse {
    match user.0 {
        Some(user) => HttpResponse::Ok().json(SessionResponse::authenticated(user)),
        None => HttpResponse::Ok().json(SessionResponse::anonymous()),
    }
}

/// 현재 인증된 사용자 정보 조회
///
/// # Endpoint
/// `GET /me`
#[get("")]
pub async fn get_current_user(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}
