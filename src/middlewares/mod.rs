//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `auth_token` 쿠키 또는 Bearer 헤더에서 액세스 토큰 추출
//! - 토큰 검증 후 `AuthenticatedUser`를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(web::Data::new(token_service))
//!     .service(
//!         web::scope("/api/v1/me")
//!             .wrap(AuthMiddleware::required())
//!             .service(handlers::auth::get_current_user)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use auth_inner::{authenticate, extract_access_token};
