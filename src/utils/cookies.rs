//! # 인증 쿠키 유틸리티
//!
//! 토큰을 담는 `HttpOnly` 쿠키를 만들고 지웁니다.
//! 쿠키의 `Max-Age`는 토큰 수명과 같습니다.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponseBuilder};

use crate::config::CookieConfig;
use crate::domain::models::token::TokenPair;
use crate::services::auth::token_codec::{ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS};

/// 액세스 토큰 쿠키 (`auth_token`, 15분)
pub fn access_cookie(token: &str, secure: bool) -> Cookie<'static> {
    auth_cookie(CookieConfig::ACCESS_COOKIE, token.to_string(), ACCESS_TOKEN_TTL_SECS, secure)
}

/// 리프레시 토큰 쿠키 (`refresh_token`, 7일)
pub fn refresh_cookie(token: &str, secure: bool) -> Cookie<'static> {
    auth_cookie(CookieConfig::REFRESH_COOKIE, token.to_string(), REFRESH_TOKEN_TTL_SECS, secure)
}

/// 로그인 완료 시 토큰 쌍을 두 쿠키로 내려줍니다.
///
/// OAuth 콜백처럼 토큰을 새로 발급하는 핸들러가 사용합니다.
///
/// ```rust,ignore
/// let pair = token_service.generate_token_pair(&identity)?;
/// let mut response = HttpResponse::Found();
/// set_session_cookies(&mut response, &pair, CookieConfig::secure());
/// ```
pub fn set_session_cookies<'a>(
    builder: &'a mut HttpResponseBuilder,
    pair: &TokenPair,
    secure: bool,
) -> &'a mut HttpResponseBuilder {
    builder
        .cookie(access_cookie(&pair.access_token, secure))
        .cookie(refresh_cookie(&pair.refresh_token, secure))
}

/// 액세스 토큰 쿠키 삭제용 (Max-Age=0)
pub fn clear_access_cookie(secure: bool) -> Cookie<'static> {
    auth_cookie(CookieConfig::ACCESS_COOKIE, String::new(), 0, secure)
}

/// 리프레시 토큰 쿠키 삭제용 (Max-Age=0)
pub fn clear_refresh_cookie(secure: bool) -> Cookie<'static> {
    auth_cookie(CookieConfig::REFRESH_COOKIE, String::new(), 0, secure)
}

/// 요청 쿠키에서 비어 있지 않은 값을 읽습니다.
pub fn read_cookie(req: &HttpRequest, name: &str) -> Option<String> {
    req.cookie(name)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty())
}

fn auth_cookie(name: &'static str, value: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(name, value)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use actix_web::HttpResponse;
    use crate::domain::models::token::Identity;
    use crate::services::auth::TokenService;

    #[test]
    fn test_access_cookie_attributes() {
        let cookie = access_cookie("a.b.c", true);

        assert_eq!(cookie.name(), "auth_token");
        assert_eq!(cookie.value(), "a.b.c");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(900)));
    }

    #[test]
    fn test_refresh_cookie_lifetime() {
        let cookie = refresh_cookie("a.b.c", false);

        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604800)));
    }

    #[test]
    fn test_session_cookies_carry_token_pair() {
        let service = TokenService::new("cookie-secret").unwrap();
        let pair = service.generate_token_pair(&Identity::new("1", "google")).unwrap();

        let mut builder = HttpResponse::Ok();
        let response = set_session_cookies(&mut builder, &pair, true).finish();
        let cookies: Vec<Cookie<'_>> = response.cookies().collect();

        let access = cookies.iter().find(|c| c.name() == "auth_token").unwrap();
        assert_eq!(access.value(), pair.access_token);
        assert_eq!(access.max_age(), Some(Duration::seconds(pair.expires_in)));

        let refresh = cookies.iter().find(|c| c.name() == "refresh_token").unwrap();
        assert_eq!(refresh.value(), pair.refresh_token);
        assert_eq!(refresh.max_age(), Some(Duration::seconds(pair.refresh_expires_in)));
        assert_eq!(refresh.http_only(), Some(true));

        assert!(service.verify_refresh_token(refresh.value()).is_some());
    }

    #[test]
    fn test_clear_cookies_expire_immediately() {
        for cookie in [clear_access_cookie(true), clear_refresh_cookie(true)] {
            assert_eq!(cookie.value(), "");
            assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        }
    }

    #[test]
    fn test_read_cookie_skips_blank_values() {
        let req = TestRequest::default()
            .cookie(Cookie::new("auth_token", "  "))
            .cookie(Cookie::new("refresh_token", "x.y.z"))
            .to_http_request();

        assert_eq!(read_cookie(&req, "auth_token"), None);
        assert_eq!(read_cookie(&req, "refresh_token"), Some("x.y.z".to_string()));
        assert_eq!(read_cookie(&req, "missing"), None);
    }
}
