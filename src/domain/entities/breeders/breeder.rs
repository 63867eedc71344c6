//! Breeder Entity Implementation
//!
//! 브리더 계정 엔티티와 서류 기반 인증(verification) 서브 레코드의 구현체입니다.
//! 입양자 엔티티와 구조적으로 평행하지만 별도 컬렉션(`breeders`)에 저장되며,
//! 소셜 연동 정보는 입양자와 다른 필드명(`oauth_provider`/`oauth_id`)을 사용합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::AccountStatus;

/// 브리더 인증 심사 상태
///
/// 상태 전이: `PENDING → REVIEWING → {APPROVED | REJECTED}`
/// REVIEWING 이후의 전이는 관리자 심사(외부 시스템)에 의해 이루어집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// 가입 직후 - 서류 미제출
    Pending,
    /// 서류 제출 완료 - 심사 대기/진행 중
    Reviewing,
    /// 심사 승인
    Approved,
    /// 심사 반려
    Rejected,
}

/// 브리더 요금제
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreederPlan {
    /// 기본 요금제
    Basic,
    /// 프로 요금제
    Pro,
}

impl BreederPlan {
    /// 문자열에서 BreederPlan을 생성합니다. 알 수 없는 값은 Basic으로 처리합니다.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pro" => BreederPlan::Pro,
            _ => BreederPlan::Basic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BreederPlan::Basic => "basic",
            BreederPlan::Pro => "pro",
        }
    }
}

/// 브리더 등급
///
/// 등급에 따라 인증에 필요한 서류 목록이 달라집니다 (2단계 고정 정책).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreederLevel {
    /// 신규 브리더 - 기본 서류만 요구
    New,
    /// 엘리트 브리더 - 추가 증빙 서류 요구
    Elite,
}

impl BreederLevel {
    /// 문자열에서 BreederLevel을 생성합니다. 알 수 없는 값은 New로 처리합니다.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "elite" => BreederLevel::Elite,
            _ => BreederLevel::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BreederLevel::New => "new",
            BreederLevel::Elite => "elite",
        }
    }
}

/// 인증 서류 종류
///
/// 직렬화 표기는 제출 API의 서류 타입 식별자와 동일합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// 신분증
    IdCard,
    /// 동물생산업 허가증
    AnimalProductionLicense,
    /// 입양 계약서 샘플 (엘리트 전용)
    AdoptionContractSample,
    /// 최근 협회 발급 서류 (엘리트 전용)
    AssociationDocument,
    /// 브리더 인증서 (엘리트 전용)
    BreederCertification,
    /// TICA/CFA 서류 (엘리트 선택사항)
    TicaCfaDocument,
}

impl DocumentType {
    /// 서류 타입의 의미명 (직렬화 표기와 동일)
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::IdCard => "id_card",
            DocumentType::AnimalProductionLicense => "animal_production_license",
            DocumentType::AdoptionContractSample => "adoption_contract_sample",
            DocumentType::AssociationDocument => "association_document",
            DocumentType::BreederCertification => "breeder_certification",
            DocumentType::TicaCfaDocument => "tica_cfa_document",
        }
    }
}

/// 제출된 인증 서류 한 건
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationDocument {
    /// 서류 종류
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// 업로드된 파일 URL
    pub url: String,
    /// 업로드 시각
    pub uploaded_at: DateTime,
}

/// 브리더 인증 서브 레코드
///
/// 서류 제출은 `documents` 목록 전체를 덮어쓰고 상태를 REVIEWING으로
/// 전이시킵니다. 승인/반려는 관리자 심사 영역이므로 이 서비스에서는
/// 전이시키지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreederVerification {
    /// 심사 상태
    pub status: VerificationStatus,
    /// 요금제
    pub plan: BreederPlan,
    /// 브리더 등급 (서류 요구사항 결정)
    pub level: BreederLevel,
    /// 제출된 서류 목록 (제출 순서 유지)
    pub documents: Vec<VerificationDocument>,
    /// 서류 제출 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime>,
    /// 심사 완료 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime>,
    /// 반려 사유
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl BreederVerification {
    /// 가입 시점의 초기 인증 레코드 생성
    pub fn initial(plan: BreederPlan, level: BreederLevel) -> Self {
        Self {
            status: VerificationStatus::Pending,
            plan,
            level,
            documents: Vec::new(),
            submitted_at: None,
            reviewed_at: None,
            rejection_reason: None,
        }
    }
}

/// 브리더 엔티티
///
/// `breeders` 컬렉션의 문서와 1:1 대응되는 계정 엔티티입니다.
///
/// ## 세션 상태
///
/// `refresh_token` 필드는 입양자와 동일하게 가장 최근 발급된 리프레시
/// 토큰의 bcrypt 해시를 저장하는 단일 슬롯입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breeder {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이메일 (입양자/브리더 컬렉션 전체에서 unique)
    pub email: String,
    /// 상호명 (대외 노출용 브리더 이름)
    pub breeder_name: String,
    /// 해시된 비밀번호 (소셜 전용 계정의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 활동 지역 - 시/도
    pub city: String,
    /// 활동 지역 - 시/군/구
    pub district: String,
    /// 취급 품종 목록
    pub breeds: Vec<String>,
    /// 소셜 인증 프로바이더 (입양자의 `social.auth_provider`에 해당)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_provider: Option<AuthProvider>,
    /// 프로바이더에서의 사용자 고유 ID (입양자의 `social.provider_user_id`에 해당)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_id: Option<String>,
    /// 프로바이더가 제공한 이메일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_email: Option<String>,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 인증 서브 레코드
    pub verification: BreederVerification,
    /// 계정 상태
    pub status: AccountStatus,
    /// 현재 유효한 리프레시 토큰의 bcrypt 해시 (로그아웃 상태면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 마지막 로그인 시간 (로그인/토큰 갱신 시 업데이트)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Breeder {
    /// 새 로컬 브리더 생성 (이메일/패스워드)
    pub fn new_local(
        email: String,
        breeder_name: String,
        password_hash: String,
        city: String,
        district: String,
        breeds: Vec<String>,
        plan: BreederPlan,
        level: BreederLevel,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            breeder_name,
            password_hash: Some(password_hash),
            city,
            district,
            breeds,
            oauth_provider: None,
            oauth_id: None,
            oauth_email: None,
            profile_image_url: None,
            verification: BreederVerification::initial(plan, level),
            status: AccountStatus::Active,
            refresh_token: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 소셜 브리더 생성
    ///
    /// 소셜 가입 완료 단계에서 호출됩니다. 비밀번호 없이 생성되며,
    /// 인증 레코드는 PENDING 상태와 빈 서류 목록으로 시작합니다.
    pub fn new_social(
        email: String,
        breeder_name: String,
        city: String,
        district: String,
        breeds: Vec<String>,
        auth_provider: AuthProvider,
        provider_user_id: String,
        provider_email: Option<String>,
        profile_image_url: Option<String>,
        plan: BreederPlan,
        level: BreederLevel,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            breeder_name,
            password_hash: None,
            city,
            district,
            breeds,
            oauth_provider: Some(auth_provider),
            oauth_id: Some(provider_user_id),
            oauth_email: provider_email,
            profile_image_url,
            verification: BreederVerification::initial(plan, level),
            status: AccountStatus::Active,
            refresh_token: None,
            last_login_at: None,
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
        self.oauth_provider.is_some()
    }

    /// 비밀번호 인증이 가능한 계정인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_verification_record() {
        let verification = BreederVerification::initial(BreederPlan::Pro, BreederLevel::New);

        assert_eq!(verification.status, VerificationStatus::Pending);
        assert_eq!(verification.plan, BreederPlan::Pro);
        assert_eq!(verification.level, BreederLevel::New);
        assert!(verification.documents.is_empty());
        assert!(verification.submitted_at.is_none());
        assert!(verification.reviewed_at.is_none());
    }

    #[test]
    fn test_plan_and_level_parsing() {
        assert_eq!(BreederPlan::from_str_or_default("pro"), BreederPlan::Pro);
        assert_eq!(BreederPlan::from_str_or_default("PRO"), BreederPlan::Pro);
        assert_eq!(BreederPlan::from_str_or_default("basic"), BreederPlan::Basic);
        assert_eq!(BreederPlan::from_str_or_default("unknown"), BreederPlan::Basic);

        assert_eq!(BreederLevel::from_str_or_default("elite"), BreederLevel::Elite);
        assert_eq!(BreederLevel::from_str_or_default("new"), BreederLevel::New);
        assert_eq!(BreederLevel::from_str_or_default(""), BreederLevel::New);
    }

    #[test]
    fn test_verification_status_serialization() {
        let json = serde_json::to_string(&VerificationStatus::Reviewing).unwrap();
        assert_eq!(json, "\"REVIEWING\"");

        let parsed: VerificationStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, VerificationStatus::Pending);
    }

    #[test]
    fn test_document_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentType::AnimalProductionLicense).unwrap(),
            "\"animal_production_license\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentType::TicaCfaDocument).unwrap(),
            "\"tica_cfa_document\""
        );

        let parsed: DocumentType = serde_json::from_str("\"adoption_contract_sample\"").unwrap();
        assert_eq!(parsed, DocumentType::AdoptionContractSample);
    }

    #[test]
    fn test_new_social_breeder_defaults() {
        let breeder = Breeder::new_social(
            "cattery@example.com".to_string(),
            "해피 캐터리".to_string(),
            "서울".to_string(),
            "강남구".to_string(),
            vec!["러시안블루".to_string()],
            AuthProvider::Naver,
            "naver-999".to_string(),
            Some("cattery@example.com".to_string()),
            None,
            BreederPlan::Basic,
            BreederLevel::New,
        );

        assert!(breeder.is_social_account());
        assert!(!breeder.can_authenticate_with_password());
        assert_eq!(breeder.verification.status, VerificationStatus::Pending);
        assert!(breeder.verification.documents.is_empty());
        assert!(breeder.refresh_token.is_none());
        assert_eq!(breeder.oauth_id.as_deref(), Some("naver-999"));
    }
}
