//! 정규화된 OAuth 사용자 프로필
//!
//! 세 프로바이더(Google/Naver/Kakao)의 서로 다른 응답 페이로드를
//! 공통 형태로 정규화한 모델입니다. 각 프로바이더 브리지가 생산하고
//! 세션 서비스가 소비합니다.

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 프로바이더 브리지가 생산하는 정규화된 사용자 프로필
///
/// 소셜 로그인 조회와 임시 가입 식별자 인코딩의 입력이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthUserProfile {
    /// 인증 프로바이더
    pub provider: AuthProvider,
    /// 프로바이더에서의 사용자 고유 ID
    pub provider_id: String,
    /// 사용자 이메일
    ///
    /// Kakao는 이메일 제공 동의가 선택 항목이므로, 실제 이메일이 없으면
    /// `kakao_{id}@temp.local` 형식의 대체 값이 들어가고
    /// `needs_email`이 true로 설정됩니다.
    pub email: String,
    /// 사용자 이름 (표시명)
    pub name: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// 프로바이더가 실제 이메일을 제공하지 않아
    /// 가입 완료 시 클라이언트가 이메일을 입력받아야 하는지 여부
    #[serde(default)]
    pub needs_email: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_email_defaults_to_false() {
        let json = r#"{
            "provider": "google",
            "provider_id": "123",
            "email": "user@gmail.com",
            "name": "홍길동"
        }"#;

        let profile: OAuthUserProfile = serde_json::from_str(json).unwrap();
        assert!(!profile.needs_email);
        assert_eq!(profile.provider, AuthProvider::Google);
    }
}
