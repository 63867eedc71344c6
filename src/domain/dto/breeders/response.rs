//! 브리더 응답 DTO
//!
//! 브리더 엔티티와 서류 제출 결과를 안전한 응답 형태로 변환합니다.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::config::AuthProvider;
use crate::domain::entities::breeders::breeder::{
    Breeder, BreederLevel, BreederPlan, VerificationStatus,
};
use crate::domain::entities::AccountStatus;

/// 브리더 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreederResponse {
    pub id: String,
    pub email: String,
    pub breeder_name: String,
    pub city: String,
    pub district: String,
    pub breeds: Vec<String>,

    /// 소셜 연동 프로바이더 (로컬 계정이면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<AuthProvider>,

    /// 소셜 연동 계정인지 여부 (편의 필드)
    pub is_social_account: bool,

    /// 인증 심사 상태
    pub verification_status: VerificationStatus,
    /// 요금제
    pub plan: BreederPlan,
    /// 브리더 등급
    pub level: BreederLevel,

    pub status: AccountStatus,
    pub profile_image_url: Option<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Breeder> for BreederResponse {
    fn from(breeder: Breeder) -> Self {
        let is_social_account = breeder.is_social_account();

        Self {
            id: breeder.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: breeder.email,
            breeder_name: breeder.breeder_name,
            city: breeder.city,
            district: breeder.district,
            breeds: breeder.breeds,
            auth_provider: breeder.oauth_provider,
            is_social_account,
            verification_status: breeder.verification.status,
            plan: breeder.verification.plan,
            level: breeder.verification.level,
            status: breeder.status,
            profile_image_url: breeder.profile_image_url,
            last_login_at: breeder.last_login_at,
            created_at: breeder.created_at,
            updated_at: breeder.updated_at,
        }
    }
}

/// 브리더 가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBreederResponse {
    pub user: BreederResponse,
    pub message: String,
}

/// 인증 서류 제출 응답 DTO
///
/// `documents`는 의미명 → 업로드 URL의 평탄화된 맵이며,
/// `is_complete`는 이 응답이 생성된 시점에 항상 true입니다
/// (누락 서류는 제출 단계에서 이미 BadRequest로 거부되므로).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSubmissionResponse {
    /// 브리더 ID
    pub breeder_id: String,
    /// 제출 후 심사 상태 (REVIEWING)
    pub status: VerificationStatus,
    /// 제출된 서류 URL 맵 (의미명 기준)
    pub documents: BTreeMap<String, String>,
    /// 필수 서류 완비 여부
    pub is_complete: bool,
    /// 제출 시각
    pub submitted_at: DateTime,
    /// 예상 심사 소요 기간 안내 문구
    pub estimated_review_time: String,
}
