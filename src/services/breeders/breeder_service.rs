//! # 브리더 계정 관리 서비스
//!
//! 브리더 계정의 가입과 조회를 담당하는 비즈니스 로직입니다.
//! 인증 서류 제출은 세션 서비스의
//! [`submit_breeder_documents`](crate::services::auth::session_service::SessionService::submit_breeder_documents)가
//! 담당합니다.

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    domain::dto::breeders::request::CreateBreederRequest,
    domain::dto::breeders::response::{BreederResponse, CreateBreederResponse},
    domain::entities::breeders::breeder::{Breeder, BreederLevel, BreederPlan},
    repositories::{
        adopters::adopter_repo::AdopterRepository,
        breeders::breeder_repo::BreederRepository,
    },
};
use crate::core::errors::AppError;

/// 브리더 계정 관리 서비스
#[service(name = "breeder")]
pub struct BreederService {
    /// 브리더 리포지토리 (자동 주입)
    breeder_repo: Arc<BreederRepository>,

    /// 입양자 리포지토리 (이메일 공동 유일성 검사용, 자동 주입)
    adopter_repo: Arc<AdopterRepository>,
}

impl BreederService {
    /// 새 브리더 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **이메일 중복 검사**: 입양자/브리더 두 컬렉션 모두 확인
    /// 2. **비밀번호 해싱**: 환경별 bcrypt cost 적용
    /// 3. **엔티티 생성/저장**: 인증 레코드는 PENDING 상태 + 빈 서류
    ///    목록으로 시작 (서류 제출은 별도 플로우)
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn register(&self, request: CreateBreederRequest) -> Result<CreateBreederResponse, AppError> {
        // 이메일 중복 검사 (두 컬렉션 공동)
        if self.adopter_repo.find_by_email(&request.email).await?.is_some()
            || self.breeder_repo.find_by_email(&request.email).await?.is_some()
        {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        // 비밀번호 해싱
        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let plan = BreederPlan::from_str_or_default(request.plan.as_deref().unwrap_or("basic"));
        let level = BreederLevel::from_str_or_default(request.level.as_deref().unwrap_or("new"));

        let breeds: Vec<String> = request.breeds.iter()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();

        let mut breeder = Breeder::new_local(
            request.email,
            request.breeder_name,
            password_hash,
            request.city,
            request.district,
            breeds,
            plan,
            level,
        );
        breeder.profile_image_url = request.profile_image_url;

        let created = self.breeder_repo.create(breeder).await?;

        log::info!("브리더 가입 완료: {} ({})", created.email, created.breeder_name);

        Ok(CreateBreederResponse {
            user: BreederResponse::from(created),
            message: "브리더 가입이 완료되었습니다. 인증 서류를 제출해주세요".to_string(),
        })
    }

    /// ID로 브리더 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 브리더가 존재하지 않음
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    pub async fn get_by_id(&self, id: &str) -> Result<BreederResponse, AppError> {
        let breeder = self.breeder_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("브리더를 찾을 수 없습니다".to_string()))?;

        Ok(BreederResponse::from(breeder))
    }
}
