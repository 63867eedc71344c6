//! # 입양자 계정 관리 서비스
//!
//! 입양자 계정의 가입과 조회를 담당하는 비즈니스 로직입니다.
//! 세션(로그인/토큰) 관련 로직은 세션 서비스가 담당하고,
//! 이 서비스는 계정 생명주기만 다룹니다.

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    domain::dto::adopters::request::CreateAdopterRequest,
    domain::dto::adopters::response::{AdopterResponse, CreateAdopterResponse},
    domain::entities::adopters::adopter::Adopter,
    repositories::{
        adopters::adopter_repo::AdopterRepository,
        breeders::breeder_repo::BreederRepository,
    },
};
use crate::core::errors::AppError;

/// 입양자 계정 관리 서비스
///
/// 이메일 유일성은 입양자/브리더 두 컬렉션에 걸쳐 공동으로 적용되므로
/// 브리더 리포지토리도 함께 주입받습니다.
#[service(name = "adopter")]
pub struct AdopterService {
    /// 입양자 리포지토리 (자동 주입)
    adopter_repo: Arc<AdopterRepository>,

    /// 브리더 리포지토리 (이메일 공동 유일성 검사용, 자동 주입)
    breeder_repo: Arc<BreederRepository>,
}

impl AdopterService {
    /// 새 입양자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **이메일 중복 검사**: 입양자/브리더 두 컬렉션 모두 확인
    /// 2. **닉네임 중복 검사**: 입양자 컬렉션 확인
    /// 3. **비밀번호 해싱**: 환경별 bcrypt cost 적용
    /// 4. **엔티티 생성/저장**: 기본 알림 설정, 빈 관심/신청/후기/신고
    ///    목록, 활성 상태로 시작
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 또는 닉네임 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn register(&self, request: CreateAdopterRequest) -> Result<CreateAdopterResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 이메일 중복 검사 (두 컬렉션 공동)
        if self.adopter_repo.find_by_email(&request.email).await?.is_some()
            || self.breeder_repo.find_by_email(&request.email).await?.is_some()
        {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        // 닉네임 중복 검사
        if self.adopter_repo.find_by_nickname(&request.nickname).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 닉네임입니다".to_string()));
        }

        // 비밀번호 해싱
        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let mut adopter = Adopter::new_local(request.email, request.nickname, password_hash);
        adopter.profile_image_url = request.profile_image_url;

        let created = self.adopter_repo.create(adopter).await?;

        log::info!("입양자 가입 완료: {} ({:?})", created.email, start_time.elapsed());

        Ok(CreateAdopterResponse {
            user: AdopterResponse::from(created),
            message: "입양자 가입이 완료되었습니다".to_string(),
        })
    }

    /// ID로 입양자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 입양자가 존재하지 않음
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    pub async fn get_by_id(&self, id: &str) -> Result<AdopterResponse, AppError> {
        let adopter = self.adopter_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("입양자를 찾을 수 없습니다".to_string()))?;

        Ok(AdopterResponse::from(adopter))
    }
}
