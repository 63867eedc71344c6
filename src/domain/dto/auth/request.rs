//! # 인증 관련 요청 DTO
//!
//! 로그인, 토큰 갱신, OAuth 콜백, 소셜 가입 완료 요청의
//! 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 로컬 로그인 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "lover@example.com",
///   "password": "SecurePass123",
///   "role": "adopter"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocalLoginRequest {
    /// 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 로그인할 역할 (`adopter` | `breeder`)
    #[validate(length(min = 1, message = "역할을 선택해주세요"))]
    pub role: String,
}

/// 토큰 갱신 요청 DTO
///
/// 리프레시 토큰은 쿠키 또는 요청 본문으로 전달될 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    /// 리프레시 토큰 (JWT)
    #[serde(default)]
    pub refresh_token: String,
}

/// OAuth 콜백 쿼리 파라미터
///
/// 프로바이더 인증 완료 후 리다이렉트로 전달되는 파라미터입니다.
/// 사용자가 인증을 거부한 경우 `error`가 설정됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    /// Authorization Code
    #[validate(length(min = 1, message = "인증 코드가 없습니다"))]
    #[serde(default)]
    pub code: String,

    /// CSRF 방지용 state 값
    #[validate(length(min = 1, message = "state 값이 없습니다"))]
    #[serde(default)]
    pub state: String,

    /// 프로바이더가 전달한 에러 코드
    pub error: Option<String>,

    /// 프로바이더가 전달한 에러 설명
    pub error_description: Option<String>,
}

/// 소셜 가입 완료 요청 DTO
///
/// 최초 소셜 로그인에서 발급된 임시 식별자
/// (`temp_{provider}_{providerId}_{epochMillis}`)와 함께,
/// OAuth 프로필에서 전달받은 이메일/이름 및 역할별 추가 정보를 담습니다.
/// 프로바이더 프로필은 이 시점에 다시 조회되지 않으므로 클라이언트가
/// 값을 그대로 전달해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteSocialRegistrationRequest {
    /// 임시 가입 식별자
    pub temp_user_id: String,

    /// 가입할 역할 (`adopter` | `breeder`)
    pub role: String,

    /// 이메일 (OAuth 프로필에서 전달, Kakao 이메일 미제공 시 사용자 입력)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    /// 이름 (OAuth 프로필에서 전달)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    /// 닉네임 (입양자 가입 시 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub nickname: Option<String>,

    /// 상호명 (브리더 가입 시 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub breeder_name: Option<String>,

    /// 활동 지역 - 시/도 (브리더 가입 시 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city: Option<String>,

    /// 활동 지역 - 시/군/구 (브리더 가입 시 필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub district: Option<String>,

    /// 취급 품종 목록 (브리더 가입 시 1개 이상 필수)
    #[serde(default)]
    pub breeds: Vec<String>,

    /// 요금제 (`basic` | `pro`, 브리더 가입 시 선택)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub plan: Option<String>,

    /// 브리더 등급 (`new` | `elite`, 생략 시 new)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub level: Option<String>,

    /// 프로필 이미지 URL (OAuth 프로필에서 전달)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_login_request_validation() {
        let request = LocalLoginRequest {
            email: "lover@example.com".to_string(),
            password: "SecurePass123".to_string(),
            role: "adopter".to_string(),
        };
        assert!(request.validate().is_ok());

        let bad_email = LocalLoginRequest {
            email: "nope".to_string(),
            ..request.clone()
        };
        assert!(bad_email.validate().is_err());

        let no_role = LocalLoginRequest {
            role: "".to_string(),
            ..request
        };
        assert!(no_role.validate().is_err());
    }

    #[test]
    fn test_complete_registration_minimal_payload() {
        let json = r#"{
            "temp_user_id": "temp_kakao_12345_1700000000000",
            "role": "breeder",
            "email": "cattery@example.com",
            "name": "김브리더"
        }"#;

        let request: CompleteSocialRegistrationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.temp_user_id, "temp_kakao_12345_1700000000000");
        assert_eq!(request.role, "breeder");
        assert!(request.breeder_name.is_none());
        assert!(request.breeds.is_empty());
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let json = r#"{
            "temp_user_id": "temp_google_1_1700000000000",
            "role": "adopter",
            "email": "  user@gmail.com  ",
            "name": "",
            "nickname": "   "
        }"#;

        let request: CompleteSocialRegistrationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email.as_deref(), Some("user@gmail.com"));
        assert!(request.name.is_none());
        assert!(request.nickname.is_none());
    }
}
