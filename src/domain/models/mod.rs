//! 도메인 모델 모듈
//!
//! - [`auth`] - 인증된 사용자, 인증 모드
//! - [`token`] - 토큰 클레임과 토큰 쌍

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
