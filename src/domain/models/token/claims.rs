//! 토큰 클레임(Payload) 모델
//!
//! 서명된 토큰 안에 실리는 클레임을 타입으로 표현합니다.
//! 토큰 문자열 자체는 임의의 JSON 객체를 담을 수 있지만, 애플리케이션 코드는
//! `type` 필드로 구분되는 [`TokenClaims`]를 통해서만 신원 정보를 신뢰합니다.
//!
//! ## 클레임 구성
//!
//! | 필드 | 액세스 토큰 | 리프레시 토큰 |
//! |------|-------------|---------------|
//! | `type` | `"access"` | `"refresh"` |
//! | `iat` / `exp` | O | O |
//! | `id`, `provider` | O | O |
//! | `email`, `name`, `picture`, `avatar` | O | X |
//! | 기타 프로바이더 필드 | O (`extra`) | X |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 토큰 안에 그대로 실리는 클레임 맵
///
/// `serde_json::Map`은 키 정렬 순서(BTreeMap)를 유지하므로
/// 직렬화 결과가 항상 정렬된 키 순서를 갖습니다.
pub type Claims = Map<String, Value>;

/// 토큰 용도 구분자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// 단기 액세스 토큰 (15분)
    Access,
    /// 장기 리프레시 토큰 (7일)
    Refresh,
}

impl TokenKind {
    /// 클레임의 `type` 필드에 기록되는 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// OAuth 프로바이더에서 받아온 사용자 신원 정보
///
/// Google은 `picture`, GitHub는 `avatar`를 사용하므로 두 필드를 모두 둡니다.
/// 그 밖의 프로바이더 전용 필드는 `extra`에 그대로 보존됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// let identity = Identity {
///     id: Some("1".to_string()),
///     provider: Some("google".to_string()),
///     email: Some("reader@example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// 프로바이더 측 사용자 ID (GitHub 숫자 ID는 문자열로 읽습니다)
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "string_or_number")]
    pub id: Option<String>,

    /// 인증 프로바이더 이름 (`google`, `github`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 프로필 이미지 URL (Google)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// 프로필 이미지 URL (GitHub)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// 그 외 프로바이더 전용 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    /// ID와 프로바이더만 가진 신원 정보를 생성합니다.
    pub fn new(id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            provider: Some(provider.into()),
            ..Default::default()
        }
    }
}

/// 액세스 토큰 클레임
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// 발급 시각 (Unix timestamp, 초)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp, 초)
    pub exp: i64,
    #[serde(flatten)]
    pub identity: Identity,
}

/// 리프레시 토큰 클레임
///
/// 장기 토큰이 유출되었을 때 노출되는 정보를 줄이기 위해
/// `id`와 `provider`만 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl RefreshClaims {
    /// 새 액세스 토큰 발급에 사용할 최소 신원 정보
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            provider: self.provider.clone(),
            ..Default::default()
        }
    }
}

/// `type` 필드로 구분되는 검증된 토큰 클레임
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TokenClaims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

impl TokenClaims {
    /// 검증을 통과한 클레임 맵을 타입이 있는 클레임으로 변환합니다.
    ///
    /// `type`이 없거나 알 수 없는 값이면 `None`을 반환합니다.
    pub fn from_claims(claims: Claims) -> Option<Self> {
        serde_json::from_value(Value::Object(claims)).ok()
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            TokenClaims::Access(_) => TokenKind::Access,
            TokenClaims::Refresh(_) => TokenKind::Refresh,
        }
    }

    pub fn expires_at(&self) -> i64 {
        match self {
            TokenClaims::Access(claims) => claims.exp,
            TokenClaims::Refresh(claims) => claims.exp,
        }
    }
}

/// 문자열 또는 숫자로 들어온 ID를 문자열로 읽습니다.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {}",
            other
        ))),
    }
}
