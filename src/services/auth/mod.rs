//! 인증 및 보안 서비스 모듈
//!
//! HS256 토큰 기반의 세션 인증을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 토큰 서명/검증 코덱 ([`token_codec`])
//! - 액세스/리프레시 토큰 발급, 검증, 갱신 ([`TokenService`])
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 상수 시간 서명 비교
//! - 토큰 만료 시간 관리
//! - 리프레시 토큰은 최소 클레임만 보유
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_config()?;
//! let tokens = token_service.generate_token_pair(&identity)?;
//! ```

pub mod token_codec;
pub mod token_service;

pub use token_service::*;
