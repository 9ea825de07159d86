//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Frontend)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (쿠키)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   TokenService - 토큰 발급/검증                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   token_codec - HS256 서명/검증                  ← Codec
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 핸들러는 `web::Data<TokenService>`로 서비스를 주입받습니다.
//!
//! ```rust,ignore
//! #[post("/verify")]
//! pub async fn verify_token(
//!     req: HttpRequest,
//!     token_service: web::Data<TokenService>,
//!     payload: Option<web::Json<VerifyRequest>>,
//! ) -> HttpResponse {
//!     // ...
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 세션 관련 엔드포인트
//!   - 세션 검증 (`POST /auth/verify`)
//!   - 토큰 갱신 (`POST /auth/refresh`)
//!   - 로그아웃 (`POST /auth/logout`)
//!   - 세션 조회 (`GET /auth/session`)
//!   - 현재 사용자 (`GET /me`)

pub mod auth;
