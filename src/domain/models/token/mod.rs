//! JWT 토큰 도메인 모델 모듈

pub mod token;

pub use token::*;
