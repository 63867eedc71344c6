//! 입양자 응답 DTO
//!
//! 입양자 엔티티를 민감 정보(비밀번호 해시, 리프레시 토큰 해시)가 제거된
//! 안전한 응답 형태로 변환합니다.

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::config::AuthProvider;
use crate::domain::entities::adopters::adopter::Adopter;
use crate::domain::entities::AccountStatus;

/// 입양자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdopterResponse {
    pub id: String,
    pub email: String,
    pub nickname: String,

    /// 소셜 연동 프로바이더 (로컬 계정이면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<AuthProvider>,

    /// 소셜 연동 계정인지 여부 (편의 필드)
    pub is_social_account: bool,

    pub status: AccountStatus,
    pub profile_image_url: Option<String>,
    pub last_activity_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Adopter> for AdopterResponse {
    fn from(adopter: Adopter) -> Self {
        let is_social_account = adopter.is_social_account();
        let auth_provider = adopter.social.as_ref().map(|link| link.auth_provider);

        Self {
            id: adopter.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: adopter.email,
            nickname: adopter.nickname,
            auth_provider,
            is_social_account,
            status: adopter.status,
            profile_image_url: adopter.profile_image_url,
            last_activity_at: adopter.last_activity_at,
            created_at: adopter.created_at,
            updated_at: adopter.updated_at,
        }
    }
}

/// 입양자 가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdopterResponse {
    pub user: AdopterResponse,
    pub message: String,
}
