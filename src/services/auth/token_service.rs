//! 토큰 관리 서비스 구현
//!
//! 설정된 시크릿으로 액세스/리프레시 토큰을 발급하고 검증합니다.
//! 전역 싱글톤 대신 `web::Data<TokenService>`로 핸들러와 미들웨어에 주입됩니다.

use std::sync::Arc;

use crate::config::JwtConfig;
use crate::domain::models::token::{AccessClaims, Identity, RefreshClaims, TokenClaims, TokenPair};
use crate::errors::{AppError, TokenError};
use crate::services::auth::token_codec::{
    self, ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS,
};

/// 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 생성하고 검증합니다.
/// 액세스 토큰(15분)과 리프레시 토큰(7일)을 지원합니다.
/// 상태가 없으므로 모든 워커가 잠금 없이 공유합니다.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<str>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// 주어진 시크릿으로 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::MissingSecret` - 시크릿이 비어 있거나 공백뿐인 경우
    pub fn new(secret: impl Into<String>) -> Result<Self, TokenError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            secret: Arc::from(secret),
        })
    }

    /// `JWT_SECRET` 환경 변수로 서비스를 생성합니다.
    pub fn from_config() -> Result<Self, TokenError> {
        Self::new(JwtConfig::secret())
    }

    /// 액세스 토큰 생성
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access_token = token_service.generate_access_token(&identity)?;
    /// ```
    pub fn generate_access_token(&self, identity: &Identity) -> Result<String, TokenError> {
        token_codec::issue_access_token(identity, &self.secret)
    }

    /// 리프레시 토큰 생성
    ///
    /// # Security
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장하는 것을 권장합니다.
    pub fn generate_refresh_token(&self, identity: &Identity) -> Result<String, TokenError> {
        token_codec::issue_refresh_token(identity, &self.secret)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// OAuth 콜백 처리 후 쿠키로 내려줄 토큰 묶음을 만듭니다.
    pub fn generate_token_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(identity)?,
            refresh_token: self.generate_refresh_token(identity)?,
            expires_in: ACCESS_TOKEN_TTL_SECS,
            refresh_expires_in: REFRESH_TOKEN_TTL_SECS,
        })
    }

    /// 토큰 검증 및 클레임 추출
    ///
    /// 서명/형식/만료 검증을 통과하고 `type`이 올바른 경우에만 `Some`을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Option<TokenClaims> {
        let claims = token_codec::verify(token, &self.secret)?;
        TokenClaims::from_claims(claims)
    }

    /// 액세스 토큰만 허용하는 검증
    pub fn verify_access_token(&self, token: &str) -> Option<AccessClaims> {
        match self.verify_token(token)? {
            TokenClaims::Access(claims) => Some(claims),
            TokenClaims::Refresh(_) => {
                log::debug!("액세스 토큰 자리에 리프레시 토큰이 사용됨");
                None
            }
        }
    }

    /// 리프레시 토큰만 허용하는 검증
    pub fn verify_refresh_token(&self, token: &str) -> Option<RefreshClaims> {
        match self.verify_token(token)? {
            TokenClaims::Refresh(claims) => Some(claims),
            TokenClaims::Access(_) => {
                log::debug!("리프레시 토큰 자리에 액세스 토큰이 사용됨");
                None
            }
        }
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 새 액세스 토큰은 리프레시 토큰의 최소 클레임(`id`, `provider`)만으로
    /// 만들어집니다. 기존 액세스 토큰을 다시 서명하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 리프레시 토큰이 유효하지 않음
    /// * `AppError::InternalError` - 토큰 생성 실패
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self
            .verify_refresh_token(refresh_token)
            .ok_or_else(|| AppError::AuthenticationError("Invalid token".to_string()))?;

        Ok(self.generate_access_token(&claims.identity())?)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header);
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Option<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token_codec::sign;
    use serde_json::json;

    fn service() -> TokenService {
        TokenService::new("test-secret").unwrap()
    }

    fn github_identity() -> Identity {
        Identity {
            id: Some("583231".to_string()),
            provider: Some("github".to_string()),
            email: Some("octocat@github.com".to_string()),
            name: Some("The Octocat".to_string()),
            avatar: Some("https://avatars.githubusercontent.com/u/583231".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_secret_is_rejected() {
        assert!(matches!(TokenService::new(""), Err(TokenError::MissingSecret)));
        assert!(matches!(TokenService::new("  "), Err(TokenError::MissingSecret)));
    }

    #[test]
    fn test_service_is_shareable_across_workers() {
        fn assert_send_sync<T: Send + Sync + Clone + 'static>() {}
        assert_send_sync::<TokenService>();
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let debug = format!("{:?}", service());
        assert!(!debug.contains("test-secret"));
    }

    #[test]
    fn test_token_pair_kinds() {
        let service = service();
        let pair = service.generate_token_pair(&github_identity()).unwrap();

        assert_eq!(pair.expires_in, 900);
        assert_eq!(pair.refresh_expires_in, 604800);

        let access = service.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(access.identity, github_identity());
        assert_eq!(access.exp - access.iat, 900);

        let refresh = service.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.id.as_deref(), Some("583231"));
        assert_eq!(refresh.exp - refresh.iat, 604800);
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let service = service();
        let pair = service.generate_token_pair(&github_identity()).unwrap();

        assert!(service.verify_access_token(&pair.refresh_token).is_none());
        assert!(service.verify_refresh_token(&pair.access_token).is_none());
    }

    #[test]
    fn test_untyped_token_is_rejected() {
        let service = service();
        let token = sign(&json!({ "id": "1", "provider": "google" }), "test-secret").unwrap();

        assert!(token_codec::verify(&token, "test-secret").is_some());
        assert!(service.verify_token(&token).is_none());
    }

    #[test]
    fn test_refresh_mints_minimal_access_token() {
        let service = service();
        let refresh = service.generate_refresh_token(&github_identity()).unwrap();

        let access = service.refresh_access_token(&refresh).unwrap();
        let claims = service.verify_access_token(&access).unwrap();

        assert_eq!(claims.identity, Identity::new("583231", "github"));
        assert!(claims.identity.email.is_none());
    }

    #[test]
    fn test_refresh_with_invalid_token_fails() {
        let service = service();
        let access = service.generate_access_token(&github_identity()).unwrap();

        assert!(matches!(
            service.refresh_access_token(&access),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.refresh_access_token("not.a.token"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_tokens_from_other_secret_are_rejected() {
        let other = TokenService::new("another-secret").unwrap();
        let token = other.generate_access_token(&github_identity()).unwrap();

        assert!(service().verify_token(&token).is_none());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(service.extract_bearer_token("Bearer "), None);
        assert_eq!(service.extract_bearer_token("Basic dXNlcjpwYXNz"), None);
    }
}
