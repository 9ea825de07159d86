//! # Domain Layer
//!
//! 토큰 서비스의 도메인 타입을 정의합니다.
//!
//! - [`models`] - 토큰 클레임, 토큰 쌍, 인증된 사용자
//! - [`dto`] - HTTP 요청/응답 DTO

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
