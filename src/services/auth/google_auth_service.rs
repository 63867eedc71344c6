//! # Google OAuth 2.0 인증 브리지
//!
//! Google OAuth 2.0 프로토콜(RFC 6749 Authorization Code Grant)을 통한
//! 소셜 로그인의 프로바이더 어댑터입니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! 1. GET /api/v1/auth/google        → 로그인 URL + state 발급
//! 2. 사용자가 Google에서 인증
//! 3. GET /api/v1/auth/google/callback?code=...&state=...
//!    ├─ state 검증 (CSRF 방지)
//!    ├─ Authorization Code → Access Token 교환
//!    ├─ UserInfo API로 프로필 조회
//!    └─ OAuthUserProfile로 정규화 → SessionService::handle_social_login
//! ```
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 |
//! |------|------------|
//! | Authorization | `https://accounts.google.com/o/oauth2/auth` |
//! | Token Exchange | `https://oauth2.googleapis.com/token` |
//! | User Info | `https://www.googleapis.com/oauth2/v2/userinfo` |

use singleton_macro::service;
use crate::config::{AuthProvider, GoogleOAuthConfig};
use crate::domain::dto::auth::response::OAuthLoginUrlResponse;
use crate::domain::models::oauth::{GoogleTokenResponse, GoogleUserInfo, OAuthUserProfile};
use crate::services::auth::oauth_state::{generate_oauth_state, verify_oauth_state};
use crate::core::errors::AppError;

/// Google OAuth 2.0 인증 브리지 서비스
///
/// Authorization Code를 받아 Google API에서 프로필을 조회하고,
/// 정규화된 [`OAuthUserProfile`]을 생산합니다. 계정 생성/로그인 판단은
/// 세션 서비스의 책임입니다.
#[service]
pub struct GoogleAuthService {
    // 외부 의존성 없음
}

impl GoogleAuthService {
    /// Google OAuth 로그인 URL 생성
    ///
    /// Authorization Code Grant 플로우의 첫 단계로, 사용자를 Google
    /// 인증 페이지로 리다이렉트하기 위한 URL과 CSRF 방지용 state를
    /// 반환합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   client_id=...&redirect_uri=...&scope=openid%20email%20profile&
    ///   response_type=code&state=...
    /// ```
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state()?;

        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code로 정규화된 사용자 프로필 조회
    ///
    /// # 처리 단계
    ///
    /// 1. **State 검증**: CSRF 공격 방지
    /// 2. **토큰 교환**: Authorization Code → Access Token
    /// 3. **프로필 조회**: UserInfo API 호출
    /// 4. **정규화**: [`OAuthUserProfile`] 생성
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ExternalServiceError` - Google API 통신 오류
    pub async fn fetch_profile(&self, auth_code: &str, state: &str) -> Result<OAuthUserProfile, AppError> {
        verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        log::info!("Google 프로필 조회 성공: {}", google_user.email);

        Ok(OAuthUserProfile {
            provider: AuthProvider::Google,
            provider_id: google_user.id,
            email: google_user.email,
            name: google_user.name,
            profile_image: google_user.picture,
            needs_email: false,
        })
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// Authorization Code는 일회용이며 수신 즉시 교환해야 합니다.
    /// Client Secret은 이 서버 사이드 교환에서만 사용됩니다.
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GoogleTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = client
            .post(&GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보 조회
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(&GoogleOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}
