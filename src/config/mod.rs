//! # Configuration Module
//!
//! 토큰 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, Rate Limiting 설정
//! - [`auth_config`] - 토큰 시크릿, 쿠키, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export COOKIE_SECURE="true"
//! export CORS_ALLOWED_ORIGINS="https://androidinternals.dev"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `PROFILE=dev|prod`로 실행하면 `.env.dev`/`.env.prod` 파일을 먼저 읽습니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
