//! 토큰 도메인 모델

pub mod claims;
pub mod token;

pub use claims::*;
pub use token::*;
