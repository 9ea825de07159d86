//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`cookies`] - 인증 쿠키 생성/삭제/읽기
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::cookies::access_cookie;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let cookie = access_cookie(&token, true);
//! print_boxed_title("Token Service Started");
//! ```

pub mod cookies;
pub mod display_terminal;
