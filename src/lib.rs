//! 안드로이드 인터널스 인증 서비스
//!
//! 사이트 세션에 쓰이는 HS256 토큰을 발급하고 검증하는 Rust 서비스입니다.
//! 토큰은 외부 JWT 라이브러리 없이 HMAC-SHA256으로 직접 서명하며,
//! 표준 JWT 구현과 같은 형식(`header.payload.signature`)을 사용합니다.
//!
//! # Features
//!
//! - **토큰 코덱**: 서명(sign), 검증(verify), 액세스/리프레시 토큰 발급
//! - **쿠키 세션**: `HttpOnly` 쿠키 기반 세션 검증, 갱신, 로그아웃
//! - **인증 미들웨어**: 필수/선택적 인증 모드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 쿠키 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  TokenService   │ ← 토큰 종류 구분, 갱신
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   token_codec   │ ← HS256 서명/검증
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use android_internals_auth::domain::models::token::Identity;
//! use android_internals_auth::services::auth::TokenService;
//!
//! let token_service = TokenService::new("secret")?;
//! let pair = token_service.generate_token_pair(&Identity::new("1", "google"))?;
//! let claims = token_service.verify_access_token(&pair.access_token);
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
