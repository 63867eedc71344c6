//! # 브리더 가입 및 서류 제출 요청 DTO
//!
//! 브리더 계정 생성과 인증 서류 제출을 위한 HTTP 요청 데이터 구조를
//! 정의합니다. 서류 URL 필드들은 모두 Option으로 선언되어 있으며,
//! 등급별 필수 여부 판정과 필드별 에러 메시지 생성은 서비스 계층에서
//! 수행됩니다 (형식이 아닌 정책의 문제이므로).

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 새로운 브리더 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "cattery@example.com",
///   "password": "SecurePass123",
///   "breeder_name": "해피 캐터리",
///   "city": "서울",
///   "district": "강남구",
///   "breeds": ["러시안블루", "브리티쉬숏헤어"],
///   "plan": "pro",
///   "level": "new"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBreederRequest {
    /// 이메일 주소 (입양자/브리더 전체에서 유일, 서비스 계층에서 검증)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    /// 상호명
    #[validate(length(min = 1, max = 50, message = "상호명은 1-50자 사이여야 합니다"))]
    pub breeder_name: String,

    /// 활동 지역 - 시/도
    #[validate(length(min = 1, message = "활동 지역(시/도)은 필수입니다"))]
    pub city: String,

    /// 활동 지역 - 시/군/구
    #[validate(length(min = 1, message = "활동 지역(시/군/구)은 필수입니다"))]
    pub district: String,

    /// 취급 품종 목록 (1개 이상)
    #[validate(custom(function = "validate_breeds_not_empty"))]
    pub breeds: Vec<String>,

    /// 요금제 (`basic` | `pro`, 생략 시 basic)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub plan: Option<String>,

    /// 브리더 등급 (`new` | `elite`, 생략 시 new)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub level: Option<String>,

    /// 프로필 이미지 URL (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// 품종 목록이 비어있지 않은지 검증
fn validate_breeds_not_empty(breeds: &Vec<String>) -> Result<(), ValidationError> {
    if breeds.iter().any(|b| !b.trim().is_empty()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("breeds_required");
        error.message = Some("취급 품종을 1개 이상 입력해주세요".into());
        Err(error)
    }
}

/// 브리더 인증 서류 제출 요청 DTO
///
/// 등급(`level`)에 따라 필수 서류가 달라지는 2단계 고정 정책을 따릅니다:
///
/// - **공통 필수**: 신분증, 동물생산업 허가증
/// - **elite 추가 필수**: 입양 계약서 샘플, 최근 협회 발급 서류, 브리더 인증서
/// - **elite 선택**: TICA/CFA 서류
///
/// 누락 판정과 서류별 에러 메시지는 세션 서비스에서 순서대로 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitDocumentsRequest {
    /// 신청 등급 (`new` | `elite`)
    pub level: String,

    /// 신분증 URL (공통 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id_card_url: Option<String>,

    /// 동물생산업 허가증 URL (공통 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub animal_production_license_url: Option<String>,

    /// 입양 계약서 샘플 URL (elite 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub adoption_contract_sample_url: Option<String>,

    /// 최근 협회 발급 서류 URL (elite 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub association_document_url: Option<String>,

    /// 브리더 인증서 URL (elite 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub breeder_certification_url: Option<String>,

    /// TICA/CFA 서류 URL (elite 선택)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tica_cfa_document_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBreederRequest {
        CreateBreederRequest {
            email: "cattery@example.com".to_string(),
            password: "SecurePass123".to_string(),
            breeder_name: "해피 캐터리".to_string(),
            city: "서울".to_string(),
            district: "강남구".to_string(),
            breeds: vec!["러시안블루".to_string()],
            plan: Some("pro".to_string()),
            level: None,
            profile_image_url: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_breeds_rejected() {
        let mut request = valid_request();
        request.breeds = vec![];
        assert!(request.validate().is_err());

        // 공백만 있는 품종도 거부
        request.breeds = vec!["   ".to_string()];
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_district_rejected() {
        let mut request = valid_request();
        request.district = "".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_submit_documents_empty_urls_become_none() {
        let json = r#"{
            "level": "elite",
            "id_card_url": "https://cdn.example.com/id.png",
            "animal_production_license_url": "  ",
            "tica_cfa_document_url": ""
        }"#;

        let request: SubmitDocumentsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.level, "elite");
        assert!(request.id_card_url.is_some());
        assert!(request.animal_production_license_url.is_none());
        assert!(request.adoption_contract_sample_url.is_none());
        assert!(request.tica_cfa_document_url.is_none());
    }
}
