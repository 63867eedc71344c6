//! Adopter HTTP Handlers
//!
//! 입양자 계정 관련 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::adopters::request::CreateAdopterRequest;
use crate::services::adopters::AdopterService;
use crate::core::errors::AppError;

/// 입양자 가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/adopters`
#[post("")]
pub async fn register_adopter(
    payload: web::Json<CreateAdopterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let adopter_service = AdopterService::instance();
    let response = adopter_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
