//! HS256 토큰 서명/검증 코덱
//!
//! `base64url(header).base64url(payload).base64url(signature)` 형식의 토큰을
//! 만들고 검증합니다. 표준 JWT(HS256)와 같은 와이어 포맷이므로 기존에 발급된
//! 토큰 및 다른 JWT 구현체와 호환됩니다.
//!
//! # 동작 요약
//!
//! - 서명: 헤더 `{"alg":"HS256","typ":"JWT"}`와 클레임을 각각 JSON으로
//!   직렬화하고 패딩 없는 base64url로 인코딩한 뒤,
//!   `"<header>.<payload>"` 바이트에 대해 HMAC-SHA256을 계산합니다.
//! - 검증: 형식, 서명(상수 시간 비교), 페이로드 JSON, 만료 시각을 확인합니다.
//!   어떤 이유로 실패하든 결과는 `None` 하나뿐입니다.
//!
//! 클레임 JSON의 키는 모든 깊이에서 정렬된 순서로 직렬화됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::json;
//! use crate::services::auth::token_codec::{sign, verify};
//!
//! let token = sign(&json!({ "foo": "bar" }), "secret123")?;
//! assert!(verify(&token, "secret123").is_some());
//! assert!(verify(&token, "wrongsecret").is_none());
//! ```

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;

use crate::domain::models::token::{Claims, Identity, TokenKind};
use crate::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// 액세스 토큰 수명: 15분
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// 리프레시 토큰 수명: 7일
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// 서명 알고리즘 이름
pub const ALGORITHM: &str = "HS256";

/// 헤더/페이로드 디코더. 패딩이 있든 없든 받아들입니다.
const SEGMENT_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Serialize)]
struct TokenHeader {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: TokenHeader = TokenHeader {
    alg: ALGORITHM,
    typ: "JWT",
};

/// 클레임을 서명하여 토큰 문자열을 만듭니다.
///
/// 같은 클레임과 시크릿이면 항상 같은 토큰이 만들어집니다.
///
/// # Errors
///
/// * `TokenError::MissingSecret` - 시크릿이 비어 있거나 공백뿐인 경우
/// * `TokenError::InvalidClaims` - 클레임이 JSON 객체가 아닌 경우
/// * `TokenError::Serialization` - 직렬화 실패
pub fn sign<T>(claims: &T, secret: &str) -> Result<String, TokenError>
where
    T: Serialize + ?Sized,
{
    if secret.trim().is_empty() {
        return Err(TokenError::MissingSecret);
    }

    // Value를 거치면 Map(BTreeMap) 덕분에 키가 정렬됩니다.
    let payload = match serde_json::to_value(claims)? {
        Value::Object(map) => map,
        _ => return Err(TokenError::InvalidClaims),
    };

    let encoded_header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&HEADER)?);
    let encoded_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload)?);

    let signing_input = format!("{}.{}", encoded_header, encoded_payload);
    let signature = URL_SAFE_NO_PAD.encode(compute_signature(&signing_input, secret));

    Ok(format!("{}.{}", signing_input, signature))
}

/// 토큰을 검증하고 클레임을 반환합니다.
///
/// 빈 입력, 잘못된 형식, 서명 불일치, 잘못된 페이로드, 만료 중 어느 경우든
/// `None`을 반환합니다. 실패 사유는 구분하지 않습니다.
pub fn verify(token: &str, secret: &str) -> Option<Claims> {
    verify_at(token, secret, Utc::now().timestamp())
}

/// 주어진 현재 시각(`now`, Unix 초) 기준으로 토큰을 검증합니다.
pub fn verify_at(token: &str, secret: &str, now: i64) -> Option<Claims> {
    if token.is_empty() || secret.is_empty() {
        return None;
    }

    let mut segments = token.split('.');
    let (encoded_header, encoded_payload, encoded_signature) =
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(h), Some(p), Some(s), None) if !h.is_empty() && !p.is_empty() && !s.is_empty() => {
                (h, p, s)
            }
            _ => return None,
        };

    let signature = URL_SAFE_NO_PAD.decode(encoded_signature).ok()?;
    let mut mac = new_mac(secret);
    mac.update(encoded_header.as_bytes());
    mac.update(b".");
    mac.update(encoded_payload.as_bytes());
    // verify_slice는 상수 시간 비교
    mac.verify_slice(&signature).ok()?;

    let header = decode_object(encoded_header)?;
    if header.get("alg").and_then(Value::as_str) != Some(ALGORITHM) {
        return None;
    }

    let claims = decode_object(encoded_payload)?;
    if is_expired(&claims, now) {
        return None;
    }

    Some(claims)
}

/// 액세스 토큰을 발급합니다 (15분).
///
/// 신원 정보 전체에 `type`, `iat`, `exp`를 더해 서명합니다.
pub fn issue_access_token(identity: &Identity, secret: &str) -> Result<String, TokenError> {
    issue_access_token_at(identity, secret, Utc::now().timestamp())
}

pub fn issue_access_token_at(
    identity: &Identity,
    secret: &str,
    now: i64,
) -> Result<String, TokenError> {
    let mut claims = match serde_json::to_value(identity)? {
        Value::Object(map) => map,
        _ => return Err(TokenError::InvalidClaims),
    };
    stamp(&mut claims, TokenKind::Access, now, ACCESS_TOKEN_TTL_SECS);
    sign(&claims, secret)
}

/// 리프레시 토큰을 발급합니다 (7일).
///
/// `id`와 `provider`만 담습니다. 이메일, 이름, 프로필 이미지는 제외됩니다.
pub fn issue_refresh_token(identity: &Identity, secret: &str) -> Result<String, TokenError> {
    issue_refresh_token_at(identity, secret, Utc::now().timestamp())
}

pub fn issue_refresh_token_at(
    identity: &Identity,
    secret: &str,
    now: i64,
) -> Result<String, TokenError> {
    let mut claims = Claims::new();
    if let Some(id) = &identity.id {
        claims.insert("id".to_string(), Value::from(id.as_str()));
    }
    if let Some(provider) = &identity.provider {
        claims.insert("provider".to_string(), Value::from(provider.as_str()));
    }
    stamp(&mut claims, TokenKind::Refresh, now, REFRESH_TOKEN_TTL_SECS);
    sign(&claims, secret)
}

fn stamp(claims: &mut Claims, kind: TokenKind, now: i64, ttl: i64) {
    claims.insert("type".to_string(), Value::from(kind.as_str()));
    claims.insert("iat".to_string(), Value::from(now));
    claims.insert("exp".to_string(), Value::from(now + ttl));
}

fn new_mac(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size")
}

fn compute_signature(signing_input: &str, secret: &str) -> Vec<u8> {
    let mut mac = new_mac(secret);
    mac.update(signing_input.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

fn decode_object(segment: &str) -> Option<Claims> {
    let bytes = SEGMENT_DECODER.decode(segment).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    match serde_json::from_str::<Value>(&text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// `exp`가 있는데 숫자가 아니거나 `now`보다 과거이면 만료로 봅니다.
fn is_expired(claims: &Claims, now: i64) -> bool {
    match claims.get("exp") {
        None => false,
        Some(exp) => match exp.as_f64() {
            Some(exp) => exp < now as f64,
            None => true,
        },
    }
}
