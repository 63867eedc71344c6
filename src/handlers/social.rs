//! Social Login HTTP Handlers
//!
//! Google/Naver/Kakao OAuth 소셜 로그인 엔드포인트를 처리하는 핸들러
//! 함수들입니다. 각 프로바이더 브리지가 프로필을 정규화하면 세션
//! 서비스가 계정 조회/임시 식별자 발급을 수행합니다.
//!
//! # 플로우
//!
//! 1. `GET /auth/{provider}` - 로그인 URL + state 발급
//! 2. `GET /auth/{provider}/callback` - 콜백 처리
//!    - 기존 계정: 토큰 쌍 발급 (`needs_additional_info: false`)
//!    - 신규 사용자: 임시 가입 식별자 발급 (`needs_additional_info: true`)
//! 3. `POST /auth/social/complete` - 역할별 추가 정보와 함께 가입 완료

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::{CompleteSocialRegistrationRequest, OAuthCallbackQuery};
use crate::services::auth::{
    GoogleAuthService, KakaoAuthService, NaverAuthService, SessionService,
};
use crate::core::errors::AppError;

/// Google OAuth 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/google`
#[get("/google")]
pub async fn google_login_url() -> Result<HttpResponse, AppError> {
    let google_service = GoogleAuthService::instance();
    let url_response = google_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Google OAuth 콜백 처리 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/google/callback?code={code}&state={state}`
#[get("/google/callback")]
pub async fn google_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    check_provider_error(&query)?;
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let google_service = GoogleAuthService::instance();
    let profile = google_service.fetch_profile(&query.code, &query.state).await?;

    let session_service = SessionService::instance();
    let response = session_service.handle_social_login(&profile).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Naver OAuth 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/naver`
#[get("/naver")]
pub async fn naver_login_url() -> Result<HttpResponse, AppError> {
    let naver_service = NaverAuthService::instance();
    let url_response = naver_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Naver OAuth 콜백 처리 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/naver/callback?code={code}&state={state}`
#[get("/naver/callback")]
pub async fn naver_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    check_provider_error(&query)?;
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let naver_service = NaverAuthService::instance();
    let profile = naver_service.fetch_profile(&query.code, &query.state).await?;

    let session_service = SessionService::instance();
    let response = session_service.handle_social_login(&profile).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Kakao OAuth 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/kakao`
#[get("/kakao")]
pub async fn kakao_login_url() -> Result<HttpResponse, AppError> {
    let kakao_service = KakaoAuthService::instance();
    let url_response = kakao_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Kakao OAuth 콜백 처리 핸들러
///
/// Kakao 프로필에 이메일이 없으면 응답의 `needs_email`이 true로
/// 설정되며, 클라이언트는 가입 완료 단계에서 이메일을 입력받아야 합니다.
///
/// # Endpoint
/// `GET /api/v1/auth/kakao/callback?code={code}&state={state}`
#[get("/kakao/callback")]
pub async fn kakao_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    check_provider_error(&query)?;
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let kakao_service = KakaoAuthService::instance();
    let profile = kakao_service.fetch_profile(&query.code, &query.state).await?;

    let session_service = SessionService::instance();
    let response = session_service.handle_social_login(&profile).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 소셜 가입 완료 핸들러
///
/// 임시 가입 식별자와 역할별 추가 정보를 받아 계정을 생성하고
/// 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/social/complete`
#[post("/social/complete")]
pub async fn complete_social_registration(
    payload: web::Json<CompleteSocialRegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();
    let response = session_service
        .complete_social_registration(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 프로바이더가 전달한 에러 확인 (사용자가 인증을 거부한 경우 등)
fn check_provider_error(query: &OAuthCallbackQuery) -> Result<(), AppError> {
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("OAuth 프로바이더 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }
    Ok(())
}
