use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::{AccessClaims, Identity};

/// 액세스 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 프로바이더에서 받은 신원 정보
    #[serde(flatten)]
    pub identity: Identity,

    /// 액세스 토큰 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> Option<&str> {
        self.identity.id.as_deref()
    }

    pub fn provider(&self) -> Option<&str> {
        self.identity.provider.as_deref()
    }
}

/// 프로바이더가 없는 토큰은 Google 로그인으로 발급된 것으로 봅니다.
const DEFAULT_PROVIDER: &str = "google";

/// 클레임을 응답용 사용자 정보로 바꿉니다.
///
/// Google은 `picture`, GitHub는 `avatar`만 채워 보내므로 두 필드를 서로 맞춰
/// 클라이언트가 어느 쪽을 읽어도 같은 이미지를 받게 합니다. `picture`가 우선입니다.
impl From<AccessClaims> for AuthenticatedUser {
    fn from(claims: AccessClaims) -> Self {
        let mut identity = claims.identity;

        let image = identity.picture.clone().or_else(|| identity.avatar.clone());
        identity.picture = image.clone();
        identity.avatar = image;

        if identity.provider.is_none() {
            identity.provider = Some(DEFAULT_PROVIDER.to_string());
        }

        Self {
            identity,
            expires_at: claims.exp,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_access_claims() {
        let claims = AccessClaims {
            iat: 100,
            exp: 1000,
            identity: Identity::new("1", "google"),
        };

        let user = AuthenticatedUser::from(claims);
        assert_eq!(user.user_id(), Some("1"));
        assert_eq!(user.provider(), Some("google"));
        assert_eq!(user.expires_at, 1000);
    }

    #[test]
    fn test_profile_image_fields_are_mirrored() {
        let google = AuthenticatedUser::from(AccessClaims {
            iat: 100,
            exp: 1000,
            identity: Identity {
                picture: Some("https://lh3.example.com/p.png".to_string()),
                ..Identity::new("1", "google")
            },
        });
        assert_eq!(google.identity.avatar.as_deref(), Some("https://lh3.example.com/p.png"));
        assert_eq!(google.identity.picture.as_deref(), Some("https://lh3.example.com/p.png"));

        let github = AuthenticatedUser::from(AccessClaims {
            iat: 100,
            exp: 1000,
            identity: Identity {
                avatar: Some("https://avatars.example.com/u/2".to_string()),
                ..Identity::new("2", "github")
            },
        });
        assert_eq!(github.identity.picture.as_deref(), Some("https://avatars.example.com/u/2"));
        assert_eq!(github.identity.avatar.as_deref(), Some("https://avatars.example.com/u/2"));

        let both = AuthenticatedUser::from(AccessClaims {
            iat: 100,
            exp: 1000,
            identity: Identity {
                picture: Some("p".to_string()),
                avatar: Some("a".to_string()),
                ..Identity::new("3", "google")
            },
        });
        assert_eq!(both.identity.avatar.as_deref(), Some("p"));
    }

    #[test]
    fn test_missing_provider_defaults_to_google() {
        let user = AuthenticatedUser::from(AccessClaims {
            iat: 100,
            exp: 1000,
            identity: Identity {
                id: Some("1".to_string()),
                ..Default::default()
            },
        });

        assert_eq!(user.provider(), Some("google"));
    }

    #[test]
    fn test_serializes_flat() {
        let user = AuthenticatedUser {
            identity: Identity::new("1", "github"),
            expires_at: 1000,
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({ "id": "1", "provider": "github", "expires_at": 1000 })
        );
    }
}
