//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::CookieConfig;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::auth::authentication_request::AuthMode;
use crate::domain::dto::SessionResponse;
use crate::services::auth::TokenService;
use crate::utils::cookies::read_cookie;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            let Some(token_service) = req.app_data::<web::Data<TokenService>>().cloned() else {
                log::error!("TokenService가 등록되지 않았습니다");
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, HttpResponse::InternalServerError().finish())
                    .map_into_right_body();
                return Ok(res);
            };

            let auth_result = authenticate(req.request(), &token_service);

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, None) => {
                    log::debug!("인증 실패: {} {}", req.method(), req.path());
                    let response = HttpResponse::Unauthorized().json(SessionResponse::invalid());
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                (AuthMode::Required, Some(user)) | (AuthMode::Optional, Some(user)) => {
                    log::debug!("인증 성공: 사용자 ID {:?}", user.user_id());
                    req.extensions_mut().insert(user);
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, None) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 액세스 토큰 문자열을 찾습니다.
///
/// `auth_token` 쿠키가 우선이고, 없으면 `Authorization: Bearer` 헤더를 봅니다.
pub fn extract_access_token(req: &HttpRequest, token_service: &TokenService) -> Option<String> {
    if let Some(token) = read_cookie(req, CookieConfig::ACCESS_COOKIE) {
        return Some(token);
    }

    let auth_header = req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;

    token_service
        .extract_bearer_token(auth_header)
        .map(str::to_string)
}

/// 요청의 액세스 토큰을 검증하여 사용자 정보를 만듭니다.
pub fn authenticate(req: &HttpRequest, token_service: &TokenService) -> Option<AuthenticatedUser> {
    let token = extract_access_token(req, token_service)?;
    token_service
        .verify_access_token(&token)
        .map(AuthenticatedUser::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;
    use crate::domain::models::token::Identity;

    fn service() -> TokenService {
        TokenService::new("middleware-secret").unwrap()
    }

    #[test]
    fn test_cookie_takes_precedence_over_header() {
        let req = TestRequest::default()
            .cookie(Cookie::new("auth_token", "from.cookie.token"))
            .insert_header(("Authorization", "Bearer from.header.token"))
            .to_http_request();

        assert_eq!(
            extract_access_token(&req, &service()),
            Some("from.cookie.token".to_string())
        );
    }

    #[test]
    fn test_bearer_header_fallback() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer from.header.token"))
            .to_http_request();

        assert_eq!(
            extract_access_token(&req, &service()),
            Some("from.header.token".to_string())
        );
    }

    #[test]
    fn test_authenticate_requires_access_token() {
        let service = service();
        let pair = service.generate_token_pair(&Identity::new("1", "google")).unwrap();

        let access_req = TestRequest::default()
            .cookie(Cookie::new("auth_token", pair.access_token.clone()))
            .to_http_request();
        let user = authenticate(&access_req, &service).unwrap();
        assert_eq!(user.user_id(), Some("1"));

        let refresh_req = TestRequest::default()
            .cookie(Cookie::new("auth_token", pair.refresh_token.clone()))
            .to_http_request();
        assert!(authenticate(&refresh_req, &service).is_none());
    }
}
