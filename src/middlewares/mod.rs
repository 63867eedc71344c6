//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT 액세스 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증 (리프레시 토큰 거부)
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 및 역할 제약 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/breeders/documents")
//!             .wrap(AuthMiddleware::required_with_role("breeder"))
//!             .route("", web::post().to(submit_documents))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
