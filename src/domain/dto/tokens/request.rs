use serde::Deserialize;
use serde_json::Value;

/// 세션 검증 요청 DTO (쿠키가 없을 때의 대체 경로)
///
/// 문자열이 아닌 값이 들어오면 유효하지 않은 토큰으로 취급합니다.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: Option<Value>,
}

impl VerifyRequest {
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().and_then(Value::as_str)
    }
}

/// 토큰 갱신 요청 DTO (쿠키가 없을 때의 대체 경로)
#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: Option<Value>,
}

impl RefreshRequest {
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_ref().and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_string_token_is_ignored() {
        let request: VerifyRequest = serde_json::from_str(r#"{"token": 123}"#).unwrap();
        assert_eq!(request.token(), None);

        let request: VerifyRequest = serde_json::from_str(r#"{"token": "a.b.c"}"#).unwrap();
        assert_eq!(request.token(), Some("a.b.c"));

        let request: RefreshRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.refresh_token(), None);
    }
}
