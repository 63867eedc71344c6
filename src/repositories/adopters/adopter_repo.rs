//! # 입양자 리포지토리 구현
//!
//! 입양자 엔티티의 데이터 액세스 계층입니다.
//! MongoDB `adopters` 컬렉션을 주 저장소로 사용하고,
//! ID 기반 조회에 Redis 캐싱을 적용합니다.
//!
//! ## 캐싱 정책
//!
//! - **ID 조회**: 캐시 우선 (TTL 10분), 모든 쓰기에서 무효화
//! - **이메일/닉네임/소셜 조회**: 항상 MongoDB 직접 조회
//!   (자격 증명 경로는 항상 최신 상태를 읽어야 하므로)
//!
//! ## 리프레시 토큰 회전
//!
//! [`rotate_refresh_token`](AdopterRepository::rotate_refresh_token)은
//! 현재 저장된 해시를 필터 조건에 포함하는 조건부 업데이트입니다.
//! 동일한 리프레시 토큰으로 동시에 두 번 갱신이 들어와도
//! 정확히 한 요청만 성공합니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime};
use mongodb::{options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::AuthProvider,
    core::registry::Repository,
    db::Database,
    domain::entities::adopters::adopter::Adopter,
};
use crate::core::errors::AppError;

/// 입양자 데이터 액세스 리포지토리
///
/// `adopters` 컬렉션에 대한 CRUD 연산과 세션 상태(리프레시 토큰 해시)
/// 관리를 담당합니다.
#[repository(name = "adopter", collection = "adopters")]
pub struct AdopterRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl AdopterRepository {
    /// ID로 입양자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 캐시 우선 조회를 적용합니다.
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Adopter))` - 입양자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 입양자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Adopter>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Adopter>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let adopter = self.collection::<Adopter>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref adopter) = adopter {
            let _ = self.redis
                .set_with_expiry(&cache_key, adopter, 600)
                .await;
        }

        Ok(adopter)
    }

    /// 이메일 주소로 입양자 조회
    ///
    /// 로그인과 중복 검사에 사용되는 자격 증명 경로이므로
    /// 캐시를 거치지 않고 항상 MongoDB에서 직접 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Adopter>, AppError> {
        self.collection::<Adopter>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 닉네임으로 입양자 조회
    ///
    /// 닉네임은 입양자 컬렉션 내에서 유일하므로 최대 1개의 결과만
    /// 반환됩니다. 가입 시 중복 검사에 사용됩니다.
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Adopter>, AppError> {
        self.collection::<Adopter>()
            .find_one(doc! { "nickname": nickname })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소셜 연동 정보로 입양자 조회
    ///
    /// `(auth_provider, provider_user_id)` 쌍은 시스템 전체에서 최대
    /// 하나의 계정에만 대응됩니다.
    pub async fn find_by_social(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<Adopter>, AppError> {
        self.collection::<Adopter>()
            .find_one(doc! {
                "social.auth_provider": provider.as_str(),
                "social.provider_user_id": provider_user_id,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 입양자 생성
    ///
    /// 이메일(두 컬렉션 공동)과 닉네임의 중복 검사는 서비스 계층에서
    /// 수행되며, 컬렉션의 유니크 인덱스가 최종 방어선이 됩니다.
    pub async fn create(&self, mut adopter: Adopter) -> Result<Adopter, AppError> {
        let result = self.collection::<Adopter>()
            .insert_one(&adopter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        adopter.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(adopter)
    }

    /// 입양자 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고 최신 문서를 반환합니다.
    /// 업데이트 성공 시 해당 입양자의 캐시를 무효화합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<Adopter>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Adopter>()
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
    /// 무효화됩니다. 활동 시각(`last_activity_at`)도 함께 갱신합니다.
    pub async fn store_refresh_token(&self, id: &str, token_hash: &str) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Adopter>()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "refresh_token": token_hash,
                    "last_activity_at": DateTime::now(),
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
    /// 필터에 현재 저장된 해시를 포함하여, 조회 시점과 쓰기 시점 사이에
    /// 다른 요청이 먼저 회전을 완료한 경우 이 업데이트는 실패합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 회전 성공 (이 요청이 승자)
    /// * `Ok(false)` - 저장된 해시가 이미 바뀌어 회전 실패
    pub async fn rotate_refresh_token(
        &self,
        id: &str,
        current_hash: &str,
        new_hash: &str,
    ) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Adopter>()
            .update_one(
                doc! { "_id": object_id, "refresh_token": current_hash },
                doc! { "$set": {
                    "refresh_token": new_hash,
                    "last_activity_at": DateTime::now(),
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

        self.collection::<Adopter>()
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

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** - 컬렉션 내 중복 이메일 방지
    /// 2. **닉네임 유니크 인덱스** - 중복 닉네임 방지
    /// 3. **소셜 연동 복합 인덱스** (sparse unique) -
    ///    `(social.auth_provider, social.provider_user_id)` 쌍의
    ///    중복 등록 방지 및 소셜 로그인 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Adopter>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 닉네임 유니크 인덱스
        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("nickname_unique".to_string())
                .build())
            .build();

        // 소셜 연동 복합 인덱스
        let social_index = IndexModel::builder()
            .keys(doc! { "social.auth_provider": 1, "social.provider_user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("social_link_unique".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, nickname_index, social_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
