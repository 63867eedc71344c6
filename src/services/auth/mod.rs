//! 인증 및 세션 서비스 모듈
//!
//! JWT 기반 토큰 인증과 OAuth 2.0 소셜 로그인(Google/Naver/Kakao)을
//! 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스(1시간)/리프레시(7일) 토큰 발급 및 검증
//! - 리프레시 토큰 회전 (조건부 업데이트 기반 단일 세션)
//! - 소셜 로그인 조회 및 임시 가입 식별자 발급/파싱
//! - 브리더 인증 서류 제출 (등급별 필수 서류 정책)
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, `type` 클레임으로 토큰 종류 구분
//! - 리프레시 토큰은 bcrypt 해시로만 저장
//! - CSRF 방지 (OAuth State 매개변수)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SessionService, TokenService};
//!
//! let session_service = SessionService::instance();
//! let pair = session_service.refresh_token(&raw_refresh_token).await?;
//! ```

pub mod token_service;
pub mod refresh_guard;
pub mod oauth_state;
pub mod session_service;
pub mod google_auth_service;
pub mod naver_auth_service;
pub mod kakao_auth_service;

pub use token_service::*;
pub use refresh_guard::*;
pub use session_service::*;
pub use google_auth_service::*;
pub use naver_auth_service::*;
pub use kakao_auth_service::*;
