//! 인증된 사용자 모델
//!
//! JWT 액세스 토큰에서 추출되어 요청 확장(Request Extensions)에 저장되는
//! 사용자 정보입니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::UserRole;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 계정 고유 ID
    pub user_id: String,

    /// 계정 이메일
    pub email: String,

    /// 계정 역할
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// 특정 역할인지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_str() == role
    }

    /// 브리더 계정인지 확인
    pub fn is_breeder(&self) -> bool {
        self.role == UserRole::Breeder
    }

    /// 입양자 계정인지 확인
    pub fn is_adopter(&self) -> bool {
        self.role == UserRole::Adopter
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
