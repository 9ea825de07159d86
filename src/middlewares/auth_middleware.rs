//! 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::auth::authentication_request::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 토큰 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{test, web, App, HttpResponse};
    use crate::domain::auth::authenticated_user::{AuthenticatedUser, OptionalUser};
    use crate::domain::models::token::Identity;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id().unwrap_or_default().to_string())
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.user_id().unwrap_or_default().to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    fn token_service() -> TokenService {
        TokenService::new("middleware-secret").unwrap()
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(
                    web::scope("/protected")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_mode_accepts_bearer_token() {
        let service = token_service();
        let token = service.generate_access_token(&Identity::new("42", "github")).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(
                    web::scope("/protected")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "42");
    }

    #[actix_web::test]
    async fn test_optional_mode_allows_anonymous() {
        let service = token_service();
        let token = service.generate_access_token(&Identity::new("7", "google")).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(
                    web::scope("/session")
                        .wrap(AuthMiddleware::optional())
                        .route("", web::get().to(maybe)),
                ),
        )
        .await;

        let anonymous = test::TestRequest::get().uri("/session").to_request();
        assert_eq!(test::call_and_read_body(&app, anonymous).await, "anonymous");

        let tampered = test::TestRequest::get()
            .uri("/session")
            .cookie(Cookie::new("auth_token", format!("{}x", token)))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, tampered).await, "anonymous");

        let signed_in = test::TestRequest::get()
            .uri("/session")
            .cookie(Cookie::new("auth_token", token))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, signed_in).await, "7");
    }

    #[actix_web::test]
    async fn test_missing_token_service_is_server_error() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
