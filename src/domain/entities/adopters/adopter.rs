//! Adopter Entity Implementation
//!
//! 입양자 계정 엔티티의 핵심 구현체입니다.
//! 로컬 인증(이메일/패스워드)과 소셜 인증(Google/Naver/Kakao)을 모두 지원합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::AccountStatus;

/// 입양자 계정의 소셜 연동 정보
///
/// 외부 OAuth 프로바이더의 사용자 식별자를 로컬 계정에 매핑합니다.
/// `(auth_provider, provider_user_id)` 쌍은 시스템 전체에서
/// 최대 하나의 계정(입양자 또는 브리더)에만 대응됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 프로바이더에서의 사용자 고유 ID
    pub provider_user_id: String,
    /// 프로바이더가 제공한 이메일 (Kakao는 미제공일 수 있음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_email: Option<String>,
}

/// 입양자 알림 설정
///
/// 계정 생성 시 모든 항목이 기본값(수신)으로 시작됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// 입양 신청 진행 상황 알림
    pub adoption_updates: bool,
    /// 채팅 메시지 알림
    pub chat_messages: bool,
    /// 마케팅/이벤트 알림
    pub marketing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            adoption_updates: true,
            chat_messages: true,
            marketing: false,
        }
    }
}

/// 입양자 엔티티
///
/// `adopters` 컬렉션의 문서와 1:1 대응되는 계정 엔티티입니다.
/// 브리더와 저장소 수준의 공통 상위 타입을 공유하지 않지만,
/// 자격 증명 표면(id, email, refresh_token 해시)은 구조적으로 평행합니다.
///
/// ## 세션 상태
///
/// `refresh_token` 필드는 가장 최근 발급된 리프레시 토큰의 bcrypt 해시를
/// 저장하는 단일 슬롯입니다. 새 토큰 발급은 이전 해시를 덮어쓰므로,
/// 서버 관점에서 계정당 활성 세션은 항상 하나입니다.
/// 원문 토큰은 어떤 경우에도 저장되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adopter {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이메일 (입양자/브리더 컬렉션 전체에서 unique)
    pub email: String,
    /// 닉네임 (입양자 컬렉션 내에서 unique)
    pub nickname: String,
    /// 해시된 비밀번호 (소셜 전용 계정의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 소셜 연동 정보 (로컬 인증 계정의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLink>,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 알림 설정
    pub notification_settings: NotificationSettings,
    /// 관심 브리더 목록
    pub favorite_breeders: Vec<ObjectId>,
    /// 입양 신청 목록
    pub adoption_applications: Vec<ObjectId>,
    /// 작성한 후기 목록
    pub reviews: Vec<ObjectId>,
    /// 제출한 신고 목록
    pub reports: Vec<ObjectId>,
    /// 계정 상태
    pub status: AccountStatus,
    /// 현재 유효한 리프레시 토큰의 bcrypt 해시 (로그아웃 상태면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 마지막 활동 시간 (로그인/토큰 갱신 시 업데이트)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Adopter {
    /// 새 로컬 입양자 생성 (이메일/패스워드)
    pub fn new_local(email: String, nickname: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname,
            password_hash: Some(password_hash),
            social: None,
            profile_image_url: None,
            notification_settings: NotificationSettings::default(),
            favorite_breeders: Vec::new(),
            adoption_applications: Vec::new(),
            reviews: Vec::new(),
            reports: Vec::new(),
            status: AccountStatus::Active,
            refresh_token: None,
            last_activity_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 소셜 입양자 생성
    ///
    /// 소셜 가입 완료 단계에서 호출됩니다. 비밀번호 없이 생성되며,
    /// 관심 목록/신청/후기/신고는 모두 빈 상태로 시작합니다.
    pub fn new_social(
        email: String,
        nickname: String,
        auth_provider: AuthProvider,
        provider_user_id: String,
        provider_email: Option<String>,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname,
            password_hash: None,
            social: Some(SocialLink {
                auth_provider,
                provider_user_id,
                provider_email,
            }),
            profile_image_url,
            notification_settings: NotificationSettings::default(),
            favorite_breeders: Vec::new(),
            adoption_applications: Vec::new(),
            reviews: Vec::new(),
            reports: Vec::new(),
            status: AccountStatus::Active,
            refresh_token: None,
            last_activity_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 소셜 연동 계정인지 확인
    pub fn is_social_account(&self) -> bool {
        self.social.is_some()
    }

    /// 비밀번호 인증이 가능한 계정인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// 소셜 프로바이더에서의 사용자 ID 가져오기
    pub fn provider_user_id(&self) -> Option<&str> {
        self.social.as_ref().map(|link| link.provider_user_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_adopter_defaults() {
        let adopter = Adopter::new_local(
            "lover@example.com".to_string(),
            "펫러버".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(adopter.id.is_none());
        assert!(adopter.can_authenticate_with_password());
        assert!(!adopter.is_social_account());
        assert_eq!(adopter.status, AccountStatus::Active);
        assert!(adopter.refresh_token.is_none());
        assert!(adopter.favorite_breeders.is_empty());
        assert!(adopter.adoption_applications.is_empty());
        assert!(adopter.reviews.is_empty());
        assert!(adopter.reports.is_empty());
        assert!(adopter.notification_settings.adoption_updates);
    }

    #[test]
    fn test_new_social_adopter() {
        let adopter = Adopter::new_social(
            "social@example.com".to_string(),
            "냥집사".to_string(),
            AuthProvider::Kakao,
            "12345".to_string(),
            Some("social@example.com".to_string()),
            None,
        );

        assert!(adopter.is_social_account());
        assert!(!adopter.can_authenticate_with_password());
        assert_eq!(adopter.provider_user_id(), Some("12345"));
        assert_eq!(
            adopter.social.as_ref().unwrap().auth_provider,
            AuthProvider::Kakao
        );
    }
}
