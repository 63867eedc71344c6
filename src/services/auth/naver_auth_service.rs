//! # Naver OAuth 2.0 인증 브리지
//!
//! Naver 로그인 API를 통한 소셜 로그인의 프로바이더 어댑터입니다.
//! Google 브리지와 동일한 Authorization Code Grant 플로우를 따르며,
//! 프로필 응답이 `response` 필드 아래에 중첩된다는 점만 다릅니다.

use singleton_macro::service;
use crate::config::{AuthProvider, NaverOAuthConfig};
use crate::domain::dto::auth::response::OAuthLoginUrlResponse;
use crate::domain::models::oauth::{NaverTokenResponse, NaverUserInfoResponse, OAuthUserProfile};
use crate::services::auth::oauth_state::{generate_oauth_state, verify_oauth_state};
use crate::core::errors::AppError;

/// Naver OAuth 2.0 인증 브리지 서비스
#[service]
pub struct NaverAuthService {
    // 외부 의존성 없음
}

impl NaverAuthService {
    /// Naver OAuth 로그인 URL 생성
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state()?;

        let params = [
            ("client_id", NaverOAuthConfig::client_id()),
            ("redirect_uri", NaverOAuthConfig::redirect_uri()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", NaverOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code로 정규화된 사용자 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ExternalServiceError` - Naver API 통신 오류,
    ///   프로필에 이메일 누락
    pub async fn fetch_profile(&self, auth_code: &str, state: &str) -> Result<OAuthUserProfile, AppError> {
        verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code, state).await?;
        let naver_response = self.get_user_info(&token_response.access_token).await?;

        if naver_response.resultcode != "00" {
            return Err(AppError::ExternalServiceError(format!(
                "Naver 프로필 조회 실패: {} ({})",
                naver_response.message, naver_response.resultcode
            )));
        }

        let naver_user = naver_response.response;

        let email = naver_user.email
            .ok_or_else(|| AppError::ExternalServiceError(
                "Naver 프로필에 이메일이 없습니다. 이메일 제공에 동의해주세요".to_string()
            ))?;

        // 이름이 없으면 별명으로 대체
        let name = naver_user.name
            .or(naver_user.nickname)
            .unwrap_or_else(|| "네이버 사용자".to_string());

        log::info!("Naver 프로필 조회 성공: {}", email);

        Ok(OAuthUserProfile {
            provider: AuthProvider::Naver,
            provider_id: naver_user.id,
            email,
            name,
            profile_image: naver_user.profile_image,
            needs_email: false,
        })
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// Naver는 토큰 교환 시에도 state 파라미터를 요구합니다.
    async fn exchange_code_for_token(&self, auth_code: &str, state: &str) -> Result<NaverTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", &NaverOAuthConfig::client_id()),
            ("client_secret", &NaverOAuthConfig::client_secret()),
            ("code", auth_code),
            ("state", state),
        ];

        let response = client
            .post(&NaverOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Naver 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Naver 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<NaverTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Naver 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Naver 회원 프로필 조회
    async fn get_user_info(&self, access_token: &str) -> Result<NaverUserInfoResponse, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(&NaverOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Naver 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Naver 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<NaverUserInfoResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Naver 사용자 정보 파싱 실패: {}", e)))
    }
}
