//! Google OAuth 2.0 응답 페이로드 모델
//!
//! Google OAuth API가 반환하는 원본 페이로드 구조입니다.
//! 브리지에서 [`OAuthUserProfile`](super::profile::OAuthUserProfile)로
//! 정규화됩니다.

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 Access Token으로 교환할 때 Google이 반환하는
/// 데이터입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: i32,
    /// 리프레시 토큰 (선택사항)
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    pub scope: String,
}

/// Google UserInfo API 응답
///
/// `https://www.googleapis.com/oauth2/v2/userinfo` 호출 결과입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 ID
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 이메일 인증 여부
    #[serde(default)]
    pub verified_email: bool,
    /// 전체 이름
    pub name: String,
    /// 이름
    #[serde(default)]
    pub given_name: String,
    /// 성
    #[serde(default)]
    pub family_name: String,
    /// 프로필 사진 URL
    pub picture: Option<String>,
}
