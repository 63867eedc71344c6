//! Breeder HTTP Handlers
//!
//! 브리더 계정 가입과 인증 서류 제출 엔드포인트를 처리하는 핸들러
//! 함수들입니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::breeders::request::{CreateBreederRequest, SubmitDocumentsRequest};
use crate::services::auth::SessionService;
use crate::services::breeders::BreederService;
use crate::core::errors::AppError;

/// 브리더 가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/breeders`
#[post("")]
pub async fn register_breeder(
    payload: web::Json<CreateBreederRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let breeder_service = BreederService::instance();
    let response = breeder_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 브리더 인증 서류 제출 핸들러
///
/// 등급별 필수 서류를 검증하고 인증 상태를 REVIEWING으로 전이시킵니다.
/// 브리더 역할의 액세스 토큰이 필요합니다 (라우트 미들웨어에서 강제).
///
/// # Endpoint
/// `POST /api/v1/breeders/documents` (브리더 인증 필요)
#[post("")]
pub async fn submit_documents(
    user: AuthenticatedUser,
    payload: web::Json<SubmitDocumentsRequest>,
) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();
    let response = session_service
        .submit_breeder_documents(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
