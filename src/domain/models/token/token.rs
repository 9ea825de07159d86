//! 발급된 토큰 쌍 구조체
//!
//! OAuth 콜백 처리 후 쿠키로 전달되는 액세스/리프레시 토큰 묶음입니다.
use serde::{Deserialize, Serialize};

/// 토큰 쌍 구조체
///
/// 액세스 토큰은 `auth_token`, 리프레시 토큰은 `refresh_token` 쿠키로 전달되며
/// 쿠키의 `Max-Age`는 각 만료 시간과 동일하게 설정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (액세스 토큰 재발급용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    /// 리프레시 토큰 만료 시간 (초)
    pub refresh_expires_in: i64,
}
