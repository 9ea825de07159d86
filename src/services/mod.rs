//! 비즈니스 로직 서비스 모듈

pub mod auth;
