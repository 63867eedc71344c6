//! # 브리더 리포지토리 구현
//!
//! 브리더 엔티티의 데이터 액세스 계층입니다.
//! MongoDB `breeders` 컬렉션을 주 저장소로 사용하고,
//! ID 기반 조회에 Redis 캐싱을 적용합니다.
//!
//! 입양자 리포지토리와 구조적으로 평행하지만, 소셜 연동 필드명이
//! 다르고(`oauth_provider`/`oauth_id`), 활동 시각 필드가
//! `last_login_at`이며, 인증 서브 레코드 갱신 연산이 추가됩니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime};
use mongodb::{options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::AuthProvider,
    core::registry::Repository,
    db::Database,
    domain::entities::breeders::breeder::Breeder,
};
use crate::core::errors::AppError;

/// 브리더 데이터 액세스 리포지토리
///
/// `breeders` 컬렉션에 대한 CRUD 연산, 세션 상태(리프레시 토큰 해시)
/// 관리 및 인증 서브 레코드 갱신을 담당합니다.
#[repository(name = "breeder", collection = "breeders")]
pub struct BreederRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl BreederRepository {
    /// ID로 브리더 조회 (캐시 우선, TTL 10분)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Breeder))` - 브리더를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 브리더가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Breeder>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Breeder>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let breeder = self.collection::<Breeder>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref breeder) = breeder {
            let _ = self.redis
                .set_with_expiry(&cache_key, breeder, 600)
                .await;
        }

        Ok(breeder)
    }

    /// 이메일 주소로 브리더 조회
    ///
    /// 자격 증명 경로이므로 캐시를 거치지 않고 MongoDB에서 직접 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Breeder>, AppError> {
        self.collection::<Breeder>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소셜 연동 정보로 브리더 조회
    ///
    /// 입양자의 `(social.auth_provider, social.provider_user_id)`와 같은
    /// 개념이지만 브리더 문서에서는 평탄한 `oauth_provider`/`oauth_id`
    /// 필드를 사용합니다.
    pub async fn find_by_social(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<Breeder>, AppError> {
        self.collection::<Breeder>()
            .find_one(doc! {
                "oauth_provider": provider.as_str(),
                "oauth_id": provider_user_id,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 브리더 생성
    ///
    /// 이메일 중복 검사(두 컬렉션 공동)는 서비스 계층에서 수행되며,
    /// 컬렉션의 유니크 인덱스가 최종 방어선이 됩니다.
    pub async fn create(&self, mut breeder: Breeder) -> Result<Breeder, AppError> {
        let result = self.collection::<Breeder>()
            .insert_one(&breeder)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        breeder.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(breeder)
    }

    /// 브리더 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고 최신 문서를 반환합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<Breeder>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Breeder>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    /// 리프레시 토큰 해시 저장 (로그인/소셜 가입 완료 시)
    ///
    /// 단일 슬롯 덮어쓰기이므로 이전에 발급된 모든 리프레시 토큰이
    /// 무효화됩니다. 로그인 시각(`last_login_at`)도 함께 갱신합니다.
    pub async fn store_refresh_token(&self, id: &str, token_hash: &str) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Breeder>()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "refresh_token": token_hash,
                    "last_login_at": DateTime::now(),
                    "updated_at": DateTime::now(),
                }},
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(id).await;

        Ok(())
    }

    /// 리프레시 토큰 해시 회전 (조건부 업데이트)
    ///
    /// 필터에 현재 저장된 해시를 포함하는 compare-and-swap 연산으로,
    /// 동일 토큰에 대한 동시 갱신 중 정확히 한 요청만 성공합니다.
    pub async fn rotate_refresh_token(
        &self,
        id: &str,
        current_hash: &str,
        new_hash: &str,
    ) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Breeder>()
            .update_one(
                doc! { "_id": object_id, "refresh_token": current_hash },
                doc! { "$set": {
                    "refresh_token": new_hash,
                    "last_login_at": DateTime::now(),
                    "updated_at": DateTime::now(),
                }},
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(id).await;

        Ok(result.modified_count > 0)
    }

    /// 리프레시 토큰 해시 제거 (로그아웃)
    ///
    /// 멱등 연산입니다. 이미 로그아웃 상태이거나 계정이 없어도
    /// 에러 없이 동일한 최종 상태(`refresh_token = null`)가 됩니다.
    pub async fn clear_refresh_token(&self, id: &str) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Breeder>()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "refresh_token": Bson::Null,
                    "updated_at": DateTime::now(),
                }},
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(id).await;

        Ok(())
    }

    /// 인증 서브 레코드 갱신 (서류 제출)
    ///
    /// `verification` 필드 전체를 덮어씁니다. 제출된 서류 목록 교체와
    /// `PENDING → REVIEWING` 상태 전이가 하나의 문서 쓰기로 이루어집니다.
    pub async fn update_verification(
        &self,
        id: &str,
        verification_doc: mongodb::bson::Document,
    ) -> Result<Option<Breeder>, AppError> {
        self.update(id, doc! {
            "verification": verification_doc,
            "updated_at": DateTime::now(),
        }).await
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** - 컬렉션 내 중복 이메일 방지
    /// 2. **소셜 연동 복합 인덱스** (sparse unique) -
    ///    `(oauth_provider, oauth_id)` 쌍의 중복 등록 방지
    /// 3. **인증 상태 인덱스** - 심사 상태별 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Breeder>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 소셜 연동 복합 인덱스
        let oauth_index = IndexModel::builder()
            .keys(doc! { "oauth_provider": 1, "oauth_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("oauth_link_unique".to_string())
                .build())
            .build();

        // 인증 상태 인덱스
        let verification_index = IndexModel::builder()
            .keys(doc! { "verification.status": 1 })
            .options(IndexOptions::builder()
                .name("verification_status".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, oauth_index, verification_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
