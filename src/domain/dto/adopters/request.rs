//! # 입양자 가입 요청 DTO
//!
//! 입양자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! `validator` 크레이트로 형식 검증을 수행하며, 이메일/닉네임 중복 등
//! 비즈니스 규칙 검증은 서비스 계층에서 별도로 수행됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 입양자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "lover@example.com",
///   "nickname": "펫러버",
///   "password": "SecurePass123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdopterRequest {
    /// 이메일 주소
    ///
    /// 로그인 식별자로 사용되며 입양자/브리더 컬렉션 전체에서
    /// 유일해야 합니다 (서비스 계층에서 검증).
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 닉네임
    ///
    /// 입양자 컬렉션 내에서 유일해야 합니다 (서비스 계층에서 검증).
    /// 한글을 포함한 유니코드 문자를 지원합니다.
    #[validate(length(
        min = 2,
        max = 20,
        message = "닉네임은 2-20자 사이여야 합니다"
    ))]
    pub nickname: String,

    /// 비밀번호
    ///
    /// 최소 8자, 대문자/소문자/숫자 각 1자 이상 포함해야 합니다.
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 프로필 이미지 URL (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// 비밀번호 복잡성 검증
///
/// 대문자, 소문자, 숫자를 각각 1자 이상 포함해야 합니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_upper && has_lower && has_digit {
        Ok(())
    } else {
        let mut error = ValidationError::new("password_strength");
        error.message = Some("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateAdopterRequest {
        CreateAdopterRequest {
            email: "lover@example.com".to_string(),
            nickname: "펫러버".to_string(),
            password: "SecurePass123".to_string(),
            profile_image_url: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_nickname_rejected() {
        let mut request = valid_request();
        request.nickname = "펫".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_weak_password_rejected() {
        let mut request = valid_request();
        request.password = "onlylowercase".to_string();
        assert!(request.validate().is_err());

        request.password = "Sh0rt".to_string();
        assert!(request.validate().is_err());
    }
}
