//! Kakao OAuth 2.0 응답 페이로드 모델
//!
//! Kakao 로그인 API가 반환하는 원본 페이로드 구조입니다.
//! Kakao는 사용자 ID가 숫자 타입이며, 이메일 제공 동의가 선택 항목이므로
//! `kakao_account.email`이 없을 수 있습니다.

use serde::Deserialize;

/// Kakao OAuth 2.0 토큰 교환 응답
#[derive(Debug, Deserialize)]
pub struct KakaoTokenResponse {
    /// Kakao OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: i64,
    /// 리프레시 토큰
    pub refresh_token: Option<String>,
}

/// Kakao 사용자 정보 조회 응답
///
/// `https://kapi.kakao.com/v2/user/me` 호출 결과입니다.
#[derive(Debug, Deserialize)]
pub struct KakaoUserInfo {
    /// Kakao 사용자 고유 ID (숫자)
    pub id: i64,
    /// 계정 정보
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

/// Kakao 계정 정보
#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccount {
    /// 이메일 주소 (동의하지 않은 경우 None)
    pub email: Option<String>,
    /// 이메일 유효 여부
    pub is_email_valid: Option<bool>,
    /// 이메일 인증 여부
    pub is_email_verified: Option<bool>,
    /// 프로필 정보
    pub profile: Option<KakaoProfile>,
}

/// Kakao 프로필 정보
#[derive(Debug, Deserialize)]
pub struct KakaoProfile {
    /// 별명
    pub nickname: Option<String>,
    /// 프로필 사진 URL
    pub profile_image_url: Option<String>,
}
