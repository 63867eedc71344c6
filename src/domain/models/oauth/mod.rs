//! OAuth 통합 모델 모듈
//!
//! 외부 OAuth 프로바이더(Google/Naver/Kakao)와의 통신에 사용되는
//! 원본 페이로드 모델과, 세 프로바이더를 공통 형태로 정규화한
//! [`OAuthUserProfile`](profile::OAuthUserProfile)을 제공합니다.
//!
//! # 데이터 흐름
//!
//! ```text
//! 프로바이더 API 응답 (provider별 구조)
//!         │
//!         ▼
//! 프로바이더 브리지 (services::auth::*_auth_service)
//!         │  정규화
//!         ▼
//! OAuthUserProfile { provider, provider_id, email, name, profile_image }
//!         │
//!         ▼
//! SessionService::handle_social_login
//! ```

pub mod profile;
pub mod google;
pub mod naver;
pub mod kakao;

pub use profile::OAuthUserProfile;
pub use google::{GoogleTokenResponse, GoogleUserInfo};
pub use naver::{NaverTokenResponse, NaverUserInfo, NaverUserInfoResponse};
pub use kakao::{KakaoAccount, KakaoProfile, KakaoTokenResponse, KakaoUserInfo};
