//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문에 사용되는 구조체들입니다.
//! 토큰 문자열은 가능하면 쿠키로만 주고받고, 본문은 대체 경로로만 사용합니다.

pub mod tokens;

pub use tokens::*;
