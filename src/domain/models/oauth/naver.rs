//! Naver OAuth 2.0 응답 페이로드 모델
//!
//! Naver 로그인 API가 반환하는 원본 페이로드 구조입니다.
//! 프로필 데이터는 `response` 필드 아래에 중첩되어 전달됩니다.

use serde::Deserialize;

/// Naver OAuth 2.0 토큰 교환 응답
///
/// Naver는 `expires_in`을 문자열로 반환합니다.
#[derive(Debug, Deserialize)]
pub struct NaverTokenResponse {
    /// Naver OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위, 문자열)
    pub expires_in: Option<String>,
    /// 리프레시 토큰
    pub refresh_token: Option<String>,
}

/// Naver 회원 프로필 조회 응답 래퍼
///
/// `https://openapi.naver.com/v1/nid/me` 호출 결과입니다.
/// 성공 시 `resultcode`는 `"00"`이며 프로필은 `response`에 중첩됩니다.
#[derive(Debug, Deserialize)]
pub struct NaverUserInfoResponse {
    /// 결과 코드 ("00"이 성공)
    pub resultcode: String,
    /// 결과 메시지
    pub message: String,
    /// 실제 프로필 데이터
    pub response: NaverUserInfo,
}

/// Naver 회원 프로필
#[derive(Debug, Deserialize)]
pub struct NaverUserInfo {
    /// Naver 사용자 고유 ID
    pub id: String,
    /// 이메일 주소
    pub email: Option<String>,
    /// 이름
    pub name: Option<String>,
    /// 별명
    pub nickname: Option<String>,
    /// 프로필 사진 URL
    pub profile_image: Option<String>,
}
