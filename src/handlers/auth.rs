//! Authentication HTTP Handlers
//!
//! 로그인, 토큰 갱신, 로그아웃, 현재 사용자 조회 엔드포인트를 처리하는
//! 핸들러 함수들입니다. JWT 토큰 기반의 상태 없는 인증을 구현하며,
//! 서버 측 세션 상태는 계정 문서의 리프레시 토큰 해시 슬롯 하나입니다.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::config::UserRole;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::{LocalLoginRequest, RefreshTokenRequest};
use crate::services::adopters::AdopterService;
use crate::services::auth::SessionService;
use crate::services::breeders::BreederService;
use crate::core::errors::AppError;

/// 로컬 로그인 핸들러
///
/// 이메일/비밀번호와 역할을 받아 해당 컬렉션에서 인증을 수행합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn local_login(
    payload: web::Json<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let role = UserRole::from_str(&payload.role)
        .map_err(|_| AppError::ValidationError("유효하지 않은 역할입니다".to_string()))?;

    let session_service = SessionService::instance();
    let response = session_service
        .login(&payload.email, &payload.password, role)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍으로 회전시킵니다.
/// 이전 리프레시 토큰은 즉시 무효화됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    // 리프레시 토큰을 쿠키 또는 요청 본문에서 추출
    let raw_token = extract_refresh_token(&req, body.as_deref())?;

    let session_service = SessionService::instance();
    let pair = session_service.refresh_token(&raw_token).await?;

    Ok(HttpResponse::Ok().json(json!({
        "access_token": pair.access_token,
        "refresh_token": pair.refresh_token,
        "access_token_expires_in": pair.access_token_expires_in,
        "refresh_token_expires_in": pair.refresh_token_expires_in,
        "token_type": "Bearer"
    })))
}

/// 로그아웃 핸들러
///
/// 계정의 리프레시 토큰 슬롯을 비웁니다. 멱등 연산으로, 두 번 호출해도
/// 동일한 최종 상태가 됩니다.
///
/// # Endpoint
/// `POST /api/v1/session/logout` (인증 필요)
#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();
    session_service.logout(&user.user_id, user.role).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "로그아웃되었습니다"
    })))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// 액세스 토큰의 역할에 따라 입양자 또는 브리더 프로필을 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/session/me` (인증 필요)
#[get("/me")]
pub async fn get_current_user(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    match user.role {
        UserRole::Adopter => {
            let adopter = AdopterService::instance().get_by_id(&user.user_id).await?;
            Ok(HttpResponse::Ok().json(adopter))
        }
        UserRole::Breeder => {
            let breeder = BreederService::instance().get_by_id(&user.user_id).await?;
            Ok(HttpResponse::Ok().json(breeder))
        }
    }
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 쿠키(`refresh_token`) → 요청 본문 순서로 확인합니다.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    // 1. 쿠키에서 리프레시 토큰 찾기
    if let Some(cookie_header) = req.headers().get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie_pair in cookie_str.split(';') {
                let cookie_pair = cookie_pair.trim();
                if let Some((name, value)) = cookie_pair.split_once('=') {
                    if name.trim() == "refresh_token" {
                        let token = value.trim();
                        if !token.is_empty() {
                            return Ok(token.to_string());
                        }
                    }
                }
            }
        }
    }

    // 2. 요청 본문에서 리프레시 토큰 찾기
    if let Some(body) = body {
        if !body.refresh_token.is_empty() {
            return Ok(body.refresh_token.clone());
        }
    }

    // 3. 토큰을 찾을 수 없음
    Err(AppError::AuthenticationError(
        "리프레시 토큰이 제공되지 않았습니다".to_string()
    ))
}
