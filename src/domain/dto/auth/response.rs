//! 인증 관련 응답 DTO
//!
//! 로그인/갱신/소셜 로그인 플로우의 응답 구조를 정의합니다.
//! 모든 응답은 민감 정보(비밀번호 해시, 리프레시 토큰 해시)를 제외한
//! 정규화된 계정 요약만 노출합니다.

use serde::{Deserialize, Serialize};
use crate::config::UserRole;
use crate::domain::entities::adopters::adopter::Adopter;
use crate::domain::entities::breeders::breeder::Breeder;
use crate::domain::models::token::TokenPair;

/// 역할과 무관하게 통일된 계정 요약
///
/// 입양자의 표시명은 닉네임, 브리더의 표시명은 상호명입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    /// 계정 ID
    pub id: String,
    /// 이메일
    pub email: String,
    /// 표시명 (닉네임 또는 상호명)
    pub name: String,
    /// 계정 역할
    pub role: UserRole,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl From<&Adopter> for AccountSummary {
    fn from(adopter: &Adopter) -> Self {
        Self {
            id: adopter.id_string().unwrap_or_default(),
            email: adopter.email.clone(),
            name: adopter.nickname.clone(),
            role: UserRole::Adopter,
            profile_image: adopter.profile_image_url.clone(),
        }
    }
}

impl From<&Breeder> for AccountSummary {
    fn from(breeder: &Breeder) -> Self {
        Self {
            id: breeder.id_string().unwrap_or_default(),
            email: breeder.email.clone(),
            name: breeder.breeder_name.clone(),
            role: UserRole::Breeder,
            profile_image: breeder.profile_image_url.clone(),
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 쌍 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 계정 요약
    pub user: AccountSummary,
    /// 발급된 토큰 쌍
    #[serde(flatten)]
    pub tokens: TokenPair,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: AccountSummary, tokens: TokenPair) -> Self {
        Self {
            user,
            tokens,
            token_type: "Bearer".to_string(),
        }
    }
}

/// OAuth 로그인 URL 응답
///
/// 클라이언트가 OAuth 로그인을 시작할 때 제공되는 응답입니다.
/// 프로바이더 인증 페이지로의 리다이렉트 URL과 CSRF 방지용 state 값을
/// 포함합니다.
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    /// 프로바이더 인증 페이지 URL
    pub login_url: String,

    /// CSRF 방지용 state 파라미터
    ///
    /// 콜백에서 받은 state와 반드시 일치 확인해야 합니다.
    pub state: String,
}

/// 소셜 로그인 조회 결과 응답
///
/// 기존 계정이 발견되면 `needs_additional_info: false`와 함께
/// 계정 정보 및 새 토큰 쌍이 반환됩니다. 발견되지 않으면
/// `needs_additional_info: true`와 임시 가입 식별자만 반환되며,
/// 이 식별자는 서버에 저장되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLoginResponse {
    /// 추가 정보 입력(가입 완료 단계)이 필요한지 여부
    pub needs_additional_info: bool,

    /// 기존 계정 요약 (기존 계정 로그인 시)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountSummary>,

    /// 발급된 토큰 쌍 (기존 계정 로그인 시)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenPair>,

    /// 임시 가입 식별자 `temp_{provider}_{providerId}_{epochMillis}`
    /// (신규 사용자인 경우)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_user_id: Option<String>,

    /// 프로바이더가 실제 이메일을 제공하지 않은 경우 true
    /// (가입 완료 시 이메일 입력 필요)
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub needs_email: bool,
}

/// 소셜 가입 완료 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRegistrationResponse {
    /// 발급된 토큰 쌍
    pub tokens: TokenPair,
    /// 생성된 계정 요약
    pub user_info: AccountSummary,
    /// 완료 안내 메시지
    pub message: String,
}
