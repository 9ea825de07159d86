use serde::Serialize;
use crate::domain::models::auth::AuthenticatedUser;

/// 세션 상태 응답
///
/// 실패 시에는 사유를 구분하지 않고 항상 같은 메시지를 돌려줍니다.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthenticatedUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl SessionResponse {
    pub const INVALID_TOKEN: &'static str = "Invalid token";

    pub fn authenticated(user: AuthenticatedUser) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
            error: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            authenticated: false,
            user: None,
            error: Some(Self::INVALID_TOKEN),
        }
    }
}

/// 토큰 갱신 응답
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub authenticated: bool,
    /// 새 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
