//! # Kakao OAuth 2.0 인증 브리지
//!
//! Kakao 로그인 API를 통한 소셜 로그인의 프로바이더 어댑터입니다.
//!
//! Kakao는 이메일 제공 동의가 선택 항목이므로, 프로필에 이메일이 없으면
//! `kakao_{id}@temp.local` 형식의 대체 이메일을 채우고 `needs_email`
//! 플래그를 올립니다. 클라이언트는 이 플래그를 보고 가입 완료 단계에서
//! 실제 이메일을 입력받아야 합니다.

use singleton_macro::service;
use crate::config::{AuthProvider, KakaoOAuthConfig};
use crate::domain::dto::auth::response::OAuthLoginUrlResponse;
use crate::domain::models::oauth::{KakaoTokenResponse, KakaoUserInfo, OAuthUserProfile};
use crate::services::auth::oauth_state::{generate_oauth_state, verify_oauth_state};
use crate::core::errors::AppError;

/// Kakao OAuth 2.0 인증 브리지 서비스
#[service]
pub struct KakaoAuthService {
    // 외부 의존성 없음
}

impl KakaoAuthService {
    /// Kakao OAuth 로그인 URL 생성
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state()?;

        let params = [
            ("client_id", KakaoOAuthConfig::client_id()),
            ("redirect_uri", KakaoOAuthConfig::redirect_uri()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", KakaoOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code로 정규화된 사용자 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ExternalServiceError` - Kakao API 통신 오류
    pub async fn fetch_profile(&self, auth_code: &str, state: &str) -> Result<OAuthUserProfile, AppError> {
        verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let kakao_user = self.get_user_info(&token_response.access_token).await?;

        log::info!("Kakao 프로필 조회 성공: {}", kakao_user.id);

        Ok(Self::normalize_profile(kakao_user))
    }

    /// Kakao 응답을 정규화된 프로필로 변환
    ///
    /// 이메일이 없거나 빈 값이면 `kakao_{id}@temp.local` 대체 이메일과
    /// `needs_email: true`를 설정합니다.
    fn normalize_profile(kakao_user: KakaoUserInfo) -> OAuthUserProfile {
        let provider_id = kakao_user.id.to_string();
        let account = kakao_user.kakao_account.unwrap_or_default();

        let real_email = account.email.filter(|email| !email.trim().is_empty());
        let needs_email = real_email.is_none();
        let email = real_email
            .unwrap_or_else(|| format!("kakao_{}@temp.local", provider_id));

        let (name, profile_image) = account.profile
            .map(|profile| (profile.nickname, profile.profile_image_url))
            .unwrap_or((None, None));

        OAuthUserProfile {
            provider: AuthProvider::Kakao,
            provider_id,
            email,
            name: name.unwrap_or_else(|| "카카오 사용자".to_string()),
            profile_image,
            needs_email,
        }
    }

    /// Authorization Code를 Access Token으로 교환
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<KakaoTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", &KakaoOAuthConfig::client_id()),
            ("client_secret", &KakaoOAuthConfig::client_secret()),
            ("redirect_uri", &KakaoOAuthConfig::redirect_uri()),
            ("code", auth_code),
        ];

        let response = client
            .post(&KakaoOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Kakao 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Kakao 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<KakaoTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Kakao 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Kakao 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(&KakaoOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Kakao 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Kakao 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<KakaoUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Kakao 사용자 정보 파싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::oauth::{KakaoAccount, KakaoProfile};

    #[test]
    fn test_normalize_profile_with_email() {
        let kakao_user = KakaoUserInfo {
            id: 12345,
            kakao_account: Some(KakaoAccount {
                email: Some("user@kakao.com".to_string()),
                is_email_valid: Some(true),
                is_email_verified: Some(true),
                profile: Some(KakaoProfile {
                    nickname: Some("냥집사".to_string()),
                    profile_image_url: Some("https://k.kakaocdn.net/img.jpg".to_string()),
                }),
            }),
        };

        let profile = KakaoAuthService::normalize_profile(kakao_user);
        assert_eq!(profile.provider, AuthProvider::Kakao);
        assert_eq!(profile.provider_id, "12345");
        assert_eq!(profile.email, "user@kakao.com");
        assert_eq!(profile.name, "냥집사");
        assert!(!profile.needs_email);
    }

    #[test]
    fn test_normalize_profile_without_email_uses_placeholder() {
        let kakao_user = KakaoUserInfo {
            id: 12345,
            kakao_account: Some(KakaoAccount {
                email: None,
                is_email_valid: None,
                is_email_verified: None,
                profile: None,
            }),
        };

        let profile = KakaoAuthService::normalize_profile(kakao_user);
        assert_eq!(profile.email, "kakao_12345@temp.local");
        assert!(profile.needs_email);
        assert_eq!(profile.name, "카카오 사용자");
    }

    #[test]
    fn test_normalize_profile_blank_email_treated_as_missing() {
        let kakao_user = KakaoUserInfo {
            id: 999,
            kakao_account: Some(KakaoAccount {
                email: Some("   ".to_string()),
                is_email_valid: None,
                is_email_verified: None,
                profile: None,
            }),
        };

        let profile = KakaoAuthService::normalize_profile(kakao_user);
        assert_eq!(profile.email, "kakao_999@temp.local");
        assert!(profile.needs_email);
    }
}
