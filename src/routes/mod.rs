//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증/소셜 로그인, 계정 가입, 세션 관리 라우트와 헬스체크
//! 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 로컬/OAuth 인증 API 엔드포인트
//! - 입양자/브리더 가입 API 엔드포인트
//! - 역할 기반 접근 제어 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ```rust,ignore
//! // 인증 불필요 (Public 라우트)
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::auth::local_login)
//! );
//!
//! // 인증 + 역할 제약
//! cfg.service(
//!     web::scope("/api/v1/breeders/documents")
//!         .wrap(AuthMiddleware::required_with_role("breeder"))
//!         .service(handlers::breeders::submit_documents)
//! );
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_account_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// ## 로컬 인증 (Public)
/// - `POST /api/v1/auth/login` - 역할별 이메일/비밀번호 로그인
/// - `POST /api/v1/auth/refresh` - 리프레시 토큰 회전
///
/// ## OAuth (Public)
/// - `GET /api/v1/auth/{google|naver|kakao}` - 로그인 URL 생성
/// - `GET /api/v1/auth/{google|naver|kakao}/callback` - 콜백 처리
/// - `POST /api/v1/auth/social/complete` - 소셜 가입 완료
///
/// ## 세션 (인증 필요)
/// - `POST /api/v1/session/logout` - 로그아웃 (멱등)
/// - `GET /api/v1/session/me` - 현재 사용자 정보 조회
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            // 로컬 인증
            .service(handlers::auth::local_login)
            .service(handlers::auth::refresh_tokens)
            // Google OAuth
            .service(handlers::social::google_login_url)
            .service(handlers::social::google_oauth_callback)
            // Naver OAuth
            .service(handlers::social::naver_login_url)
            .service(handlers::social::naver_oauth_callback)
            // Kakao OAuth
            .service(handlers::social::kakao_login_url)
            .service(handlers::social::kakao_oauth_callback)
            // 소셜 가입 완료
            .service(handlers::social::complete_social_registration)
    );

    // 인증이 필요한 세션 라우트들
    cfg.service(
        web::scope("/api/v1/session")
            .wrap(AuthMiddleware::required_with_roles(vec!["adopter", "breeder"]))
            .service(handlers::auth::logout)
            .service(handlers::auth::get_current_user)
    );
}

/// 계정 가입/서류 제출 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /api/v1/adopters` - 입양자 가입
/// - `POST /api/v1/breeders` - 브리더 가입
///
/// ## Protected 라우트 (브리더 인증 필요)
/// - `POST /api/v1/breeders/documents` - 인증 서류 제출
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    // 더 구체적인 prefix를 먼저 등록 (브리더 스코프가 가로채지 않도록)
    cfg.service(
        web::scope("/api/v1/breeders/documents")
            .wrap(AuthMiddleware::required_with_role("breeder"))
            .service(handlers::breeders::submit_documents)
    );

    // Public routes
    cfg.service(
        web::scope("/api/v1/adopters")
            .service(handlers::adopters::register_adopter)
    );
    cfg.service(
        web::scope("/api/v1/breeders")
            .service(handlers::breeders::register_breeder)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "pet_adoption_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "pet_adoption_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
