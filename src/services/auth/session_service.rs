//! # 세션 서비스 구현
//!
//! 로그인, 토큰 갱신, 로그아웃, 소셜 로그인 조회/가입 완료,
//! 브리더 인증 서류 제출을 오케스트레이션하는 핵심 비즈니스 로직입니다.
//!
//! ## 세션 모델
//!
//! 계정당 리프레시 토큰 슬롯은 하나입니다. 로그인/갱신/소셜 가입 완료는
//! 모두 새 리프레시 토큰의 bcrypt 해시를 그 슬롯에 덮어쓰므로, 이전에
//! 발급된 리프레시 토큰은 즉시 무효화됩니다 (회전 기반 단일 세션).
//!
//! ## 갱신 회전의 원자성
//!
//! 갱신은 "검증 후 쓰기"의 읽기-수정-쓰기 시퀀스이므로, 같은 토큰으로
//! 동시에 두 요청이 들어오면 둘 다 검증을 통과할 수 있습니다.
//! 쓰기를 현재 저장된 해시에 대한 조건부 업데이트(compare-and-swap)로
//! 수행하여 정확히 한 요청만 성공하도록 보장합니다. 패배한 요청은
//! 인증 실패로 처리됩니다.
//!
//! ## 임시 가입 식별자
//!
//! 최초 소셜 로그인에서 계정이 없으면
//! `temp_{provider}_{providerId}_{epochMillis}` 형식의 임시 식별자를
//! 발급합니다. 이 값은 서버에 저장되지 않으며, 가입 완료 요청에서
//! `_` 기준 정확히 4개 파트로 파싱하여 복원합니다.

use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::Utc;
use mongodb::bson::DateTime;
use singleton_macro::service;
use crate::{
    config::{AuthProvider, UserRole},
    domain::dto::auth::request::CompleteSocialRegistrationRequest,
    domain::dto::auth::response::{
        AccountSummary, CompleteRegistrationResponse, LoginResponse, SocialLoginResponse,
    },
    domain::dto::breeders::request::SubmitDocumentsRequest,
    domain::dto::breeders::response::DocumentSubmissionResponse,
    domain::entities::AccountStatus,
    domain::entities::adopters::adopter::Adopter,
    domain::entities::breeders::breeder::{
        Breeder, BreederLevel, BreederPlan, BreederVerification, DocumentType,
        VerificationDocument, VerificationStatus,
    },
    domain::models::oauth::OAuthUserProfile,
    domain::models::token::TokenPair,
    repositories::{
        adopters::adopter_repo::AdopterRepository,
        breeders::breeder_repo::BreederRepository,
    },
    services::auth::refresh_guard::RefreshTokenGuard,
    services::auth::token_service::TokenService,
};
use crate::core::errors::AppError;

/// 서류 제출 완료 후 안내하는 예상 심사 소요 기간
const REVIEW_SLA_TEXT: &str = "3~5일";

/// 세션 관리 비즈니스 로직 서비스
///
/// 입양자/브리더 두 컬렉션을 자격 증명 저장소로 사용하며,
/// 토큰 발급은 [`TokenService`], 리프레시 토큰 해시는
/// [`RefreshTokenGuard`]에 위임합니다.
///
/// ## 주요 책임
///
/// 1. **로컬 로그인**: 역할별 컬렉션에서 계정 조회 + bcrypt 검증
/// 2. **토큰 갱신**: 리프레시 토큰 검증 + 조건부 회전
/// 3. **로그아웃**: 리프레시 토큰 슬롯 비우기 (멱등)
/// 4. **소셜 로그인 조회**: 두 컬렉션 순차 검색, 미가입 시 임시 식별자 발급
/// 5. **소셜 가입 완료**: 역할별 필수 필드 검증 + 계정 생성 + 토큰 발급
/// 6. **서류 제출**: 등급별 필수 서류 검증 + 인증 레코드 갱신
#[service(name = "session")]
pub struct SessionService {
    /// 입양자 리포지토리 (자동 주입)
    adopter_repo: Arc<AdopterRepository>,

    /// 브리더 리포지토리 (자동 주입)
    breeder_repo: Arc<BreederRepository>,
}

impl SessionService {
    /// 로컬 계정 로그인
    ///
    /// 역할에 해당하는 컬렉션에서 이메일로 계정을 찾아 비밀번호를
    /// 검증하고, 성공 시 새 토큰 쌍을 발급하며 리프레시 토큰 해시를
    /// 저장합니다 (활동 시각 갱신 포함).
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 계정 없음/비밀번호 불일치
    ///   (보안상 동일한 메시지), 소셜 전용 계정, 비활성 계정
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<LoginResponse, AppError> {
        match role {
            UserRole::Adopter => {
                let adopter = self.adopter_repo
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))?;

                self.verify_local_password(
                    password,
                    adopter.password_hash.as_deref(),
                    adopter.social.as_ref().map(|link| link.auth_provider),
                )?;

                if adopter.status != AccountStatus::Active {
                    return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
                }

                let adopter_id = adopter.id_string()
                    .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;

                let tokens = self.issue_and_store_adopter_tokens(&adopter_id, &adopter.email).await?;

                log::info!("입양자 로그인 성공: {}", adopter.email);
                Ok(LoginResponse::new(AccountSummary::from(&adopter), tokens))
            }
            UserRole::Breeder => {
                let breeder = self.breeder_repo
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))?;

                self.verify_local_password(
                    password,
                    breeder.password_hash.as_deref(),
                    breeder.oauth_provider,
                )?;

                if breeder.status != AccountStatus::Active {
                    return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
                }

                let breeder_id = breeder.id_string()
                    .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;

                let tokens = self.issue_and_store_breeder_tokens(&breeder_id, &breeder.email).await?;

                log::info!("브리더 로그인 성공: {}", breeder.email);
                Ok(LoginResponse::new(AccountSummary::from(&breeder), tokens))
            }
        }
    }

    /// 리프레시 토큰으로 토큰 쌍 갱신
    ///
    /// # 검증 순서
    ///
    /// 1. 서명/만료 검증 (만료·형식 오류·서명 불일치를 구분한 메시지)
    /// 2. `type == "refresh"` 클레임 확인
    /// 3. 역할 파싱 후 해당 컬렉션에서 계정 조회
    /// 4. 저장된 리프레시 토큰 해시 존재 확인 (로그아웃 상태 거부)
    /// 5. 제시된 원문 토큰을 저장된 해시와 대조
    /// 6. 새 토큰 쌍 발급 후 조건부 회전 (동시 갱신 시 한 요청만 승리)
    ///
    /// # Effect
    ///
    /// 어느 시점이든 계정당 유효한 리프레시 토큰은 정확히 하나입니다.
    /// 갱신은 이전 리프레시 토큰을 무효화합니다.
    pub async fn refresh_token(&self, raw_refresh_token: &str) -> Result<TokenPair, AppError> {
        let token_service = TokenService::instance();

        // 1. 서명/만료 검증
        let claims = token_service.verify(raw_refresh_token)?;

        // 2. 리프레시 토큰 종류 확인
        if !claims.is_refresh() {
            return Err(AppError::AuthenticationError(
                "리프레시 토큰이 아닙니다".to_string()
            ));
        }

        // 3. 역할 파싱 (알 수 없는 역할은 인증 실패)
        let role = UserRole::from_str(&claims.role)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 역할입니다".to_string()))?;

        match role {
            UserRole::Adopter => {
                let adopter = self.adopter_repo
                    .find_by_id(&claims.sub)
                    .await
                    .map_err(|_| AppError::AuthenticationError("계정을 찾을 수 없습니다".to_string()))?
                    .ok_or_else(|| AppError::AuthenticationError("계정을 찾을 수 없습니다".to_string()))?;

                // 4. 로그아웃 상태 확인
                let stored_hash = adopter.refresh_token.as_deref()
                    .ok_or_else(|| AppError::AuthenticationError(
                        "로그아웃된 세션입니다. 다시 로그인해주세요".to_string()
                    ))?;

                // 5. 저장된 해시와 대조
                if !RefreshTokenGuard::verify(raw_refresh_token, stored_hash) {
                    return Err(AppError::AuthenticationError(
                        "리프레시 토큰이 일치하지 않습니다".to_string()
                    ));
                }

                // 6. 새 토큰 쌍 발급 + 조건부 회전
                let pair = token_service.issue(&claims.sub, &claims.email, UserRole::Adopter)?;
                let new_hash = RefreshTokenGuard::hash(&pair.refresh_token)?;

                let rotated = self.adopter_repo
                    .rotate_refresh_token(&claims.sub, stored_hash, &new_hash)
                    .await?;

                if !rotated {
                    // 조회와 쓰기 사이에 다른 요청이 먼저 회전을 완료
                    return Err(AppError::AuthenticationError(
                        "리프레시 토큰이 이미 사용되었습니다".to_string()
                    ));
                }

                log::debug!("입양자 토큰 갱신 성공: {}", claims.sub);
                Ok(pair)
            }
            UserRole::Breeder => {
                let breeder = self.breeder_repo
                    .find_by_id(&claims.sub)
                    .await
                    .map_err(|_| AppError::AuthenticationError("계정을 찾을 수 없습니다".to_string()))?
                    .ok_or_else(|| AppError::AuthenticationError("계정을 찾을 수 없습니다".to_string()))?;

                let stored_hash = breeder.refresh_token.as_deref()
                    .ok_or_else(|| AppError::AuthenticationError(
                        "로그아웃된 세션입니다. 다시 로그인해주세요".to_string()
                    ))?;

                if !RefreshTokenGuard::verify(raw_refresh_token, stored_hash) {
                    return Err(AppError::AuthenticationError(
                        "리프레시 토큰이 일치하지 않습니다".to_string()
                    ));
                }

                let pair = token_service.issue(&claims.sub, &claims.email, UserRole::Breeder)?;
                let new_hash = RefreshTokenGuard::hash(&pair.refresh_token)?;

                let rotated = self.breeder_repo
                    .rotate_refresh_token(&claims.sub, stored_hash, &new_hash)
                    .await?;

                if !rotated {
                    return Err(AppError::AuthenticationError(
                        "리프레시 토큰이 이미 사용되었습니다".to_string()
                    ));
                }

                log::debug!("브리더 토큰 갱신 성공: {}", claims.sub);
                Ok(pair)
            }
        }
    }

    /// 로그아웃
    ///
    /// 해당 계정의 리프레시 토큰 슬롯을 비웁니다. 멱등 연산으로,
    /// 이미 로그아웃 상태여도 동일한 최종 상태가 되며 에러가 없습니다.
    pub async fn logout(&self, account_id: &str, role: UserRole) -> Result<(), AppError> {
        match role {
            UserRole::Adopter => self.adopter_repo.clear_refresh_token(account_id).await?,
            UserRole::Breeder => self.breeder_repo.clear_refresh_token(account_id).await?,
        }

        log::info!("로그아웃 처리됨: {} ({})", account_id, role.as_str());
        Ok(())
    }

    /// 소셜 로그인 조회
    ///
    /// 입양자 컬렉션 → 브리더 컬렉션 순서로 `(provider, provider_id)`
    /// 쌍을 검색합니다. 먼저 발견된 계정이 로그인 처리되며(새 토큰 쌍
    /// 발급 + 리프레시 해시 저장), 어느 쪽에도 없으면 임시 가입
    /// 식별자를 발급합니다. 임시 식별자는 서버에 저장되지 않습니다.
    pub async fn handle_social_login(
        &self,
        profile: &OAuthUserProfile,
    ) -> Result<SocialLoginResponse, AppError> {
        // 입양자 컬렉션 우선 검색
        if let Some(adopter) = self.adopter_repo
            .find_by_social(profile.provider, &profile.provider_id)
            .await?
        {
            let adopter_id = adopter.id_string()
                .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;
            let tokens = self.issue_and_store_adopter_tokens(&adopter_id, &adopter.email).await?;

            log::info!("소셜 로그인 (입양자): {} via {}", adopter.email, profile.provider.as_str());
            return Ok(SocialLoginResponse {
                needs_additional_info: false,
                user: Some(AccountSummary::from(&adopter)),
                tokens: Some(tokens),
                temp_user_id: None,
                needs_email: false,
            });
        }

        // 브리더 컬렉션 검색
        if let Some(breeder) = self.breeder_repo
            .find_by_social(profile.provider, &profile.provider_id)
            .await?
        {
            let breeder_id = breeder.id_string()
                .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;
            let tokens = self.issue_and_store_breeder_tokens(&breeder_id, &breeder.email).await?;

            log::info!("소셜 로그인 (브리더): {} via {}", breeder.email, profile.provider.as_str());
            return Ok(SocialLoginResponse {
                needs_additional_info: false,
                user: Some(AccountSummary::from(&breeder)),
                tokens: Some(tokens),
                temp_user_id: None,
                needs_email: false,
            });
        }

        // 미가입 - 임시 가입 식별자 발급 (비영속)
        let temp_user_id = Self::generate_temp_user_id(profile.provider, &profile.provider_id);

        log::info!("신규 소셜 사용자: {} via {}", profile.provider_id, profile.provider.as_str());
        Ok(SocialLoginResponse {
            needs_additional_info: true,
            user: None,
            tokens: None,
            temp_user_id: Some(temp_user_id),
            needs_email: profile.needs_email,
        })
    }

    /// 소셜 가입 완료
    ///
    /// # 처리 순서
    ///
    /// 1. 임시 식별자 파싱 (`_` 기준 정확히 4개 파트, 첫 파트 `"temp"`)
    /// 2. 두 컬렉션 재검색 - 최초 콜백과 완료 호출 사이에 계정이 생성된
    ///    경쟁 상태 방어 (역할별로 구분된 Conflict 메시지)
    /// 3. 이메일/이름 필수 확인 (프로바이더 프로필은 재조회하지 않음)
    /// 4. 역할별 분기:
    ///    - 입양자: 닉네임 필수 + 유일성 확인
    ///    - 브리더: 상호명/시도/시군구/품종 필수 확인, 인증 레코드는
    ///      PENDING + 빈 서류 목록으로 시작
    /// 5. 토큰 쌍 발급, 리프레시 해시 저장, 활동 시각 갱신
    pub async fn complete_social_registration(
        &self,
        request: CompleteSocialRegistrationRequest,
    ) -> Result<CompleteRegistrationResponse, AppError> {
        // 1. 임시 식별자 파싱
        let (provider, provider_id) = Self::parse_temp_user_id(&request.temp_user_id)?;

        // 2. 경쟁 상태 방어 - 재검색
        if self.adopter_repo.find_by_social(provider, &provider_id).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 입양자로 가입된 소셜 계정입니다".to_string()
            ));
        }
        if self.breeder_repo.find_by_social(provider, &provider_id).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 브리더로 가입된 소셜 계정입니다".to_string()
            ));
        }

        // 3. 이메일/이름 필수 확인
        let email = request.email.clone()
            .ok_or_else(|| AppError::ValidationError("이메일은 필수입니다".to_string()))?;
        let name = request.name.clone()
            .ok_or_else(|| AppError::ValidationError("이름은 필수입니다".to_string()))?;

        // 이메일 유일성은 두 컬렉션에 걸쳐 공동으로 적용
        self.ensure_email_unused(&email).await?;

        let role = UserRole::from_str(&request.role)
            .map_err(|_| AppError::ValidationError("유효하지 않은 역할입니다".to_string()))?;

        // 4. 역할별 분기
        match role {
            UserRole::Adopter => {
                let nickname = request.nickname.clone()
                    .ok_or_else(|| AppError::ValidationError("닉네임은 필수입니다".to_string()))?;

                if self.adopter_repo.find_by_nickname(&nickname).await?.is_some() {
                    return Err(AppError::ConflictError("이미 사용 중인 닉네임입니다".to_string()));
                }

                let adopter = Adopter::new_social(
                    email.clone(),
                    nickname,
                    provider,
                    provider_id,
                    Some(email),
                    request.profile_image.clone(),
                );

                let created = self.adopter_repo.create(adopter).await?;
                let adopter_id = created.id_string()
                    .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;

                // 5. 토큰 발급 + 리프레시 해시 저장 + 활동 시각 갱신
                let tokens = self.issue_and_store_adopter_tokens(&adopter_id, &created.email).await?;

                log::info!("소셜 입양자 가입 완료: {} ({})", created.email, name);
                Ok(CompleteRegistrationResponse {
                    tokens,
                    user_info: AccountSummary::from(&created),
                    message: "입양자 가입이 완료되었습니다".to_string(),
                })
            }
            UserRole::Breeder => {
                let breeder_name = request.breeder_name.clone()
                    .ok_or_else(|| AppError::ValidationError("상호명은 필수입니다".to_string()))?;
                let city = request.city.clone()
                    .ok_or_else(|| AppError::ValidationError("활동 지역(시/도)은 필수입니다".to_string()))?;
                let district = request.district.clone()
                    .ok_or_else(|| AppError::ValidationError("활동 지역(시/군/구)은 필수입니다".to_string()))?;

                let breeds: Vec<String> = request.breeds.iter()
                    .map(|b| b.trim().to_string())
                    .filter(|b| !b.is_empty())
                    .collect();
                if breeds.is_empty() {
                    return Err(AppError::ValidationError("취급 품종을 1개 이상 입력해주세요".to_string()));
                }

                let plan = BreederPlan::from_str_or_default(request.plan.as_deref().unwrap_or("basic"));
                let level = BreederLevel::from_str_or_default(request.level.as_deref().unwrap_or("new"));

                let breeder = Breeder::new_social(
                    email.clone(),
                    breeder_name,
                    city,
                    district,
                    breeds,
                    provider,
                    provider_id,
                    Some(email),
                    request.profile_image.clone(),
                    plan,
                    level,
                );

                let created = self.breeder_repo.create(breeder).await?;
                let breeder_id = created.id_string()
                    .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;

                let tokens = self.issue_and_store_breeder_tokens(&breeder_id, &created.email).await?;

                log::info!("소셜 브리더 가입 완료: {} ({})", created.email, name);
                Ok(CompleteRegistrationResponse {
                    tokens,
                    user_info: AccountSummary::from(&created),
                    message: "브리더 가입이 완료되었습니다".to_string(),
                })
            }
        }
    }

    /// 브리더 인증 서류 제출
    ///
    /// 등급별 필수 서류를 검증하고, 인증 레코드의 서류 목록을 교체하며
    /// 상태를 REVIEWING으로 전이시킵니다. APPROVED/REJECTED 전이는
    /// 관리자 심사(외부) 영역입니다.
    ///
    /// # 서류 정책 (2단계 고정)
    ///
    /// - **공통 필수**: 신분증, 동물생산업 허가증
    /// - **elite 추가 필수**: 입양 계약서 샘플, 최근 협회 발급 서류,
    ///   브리더 인증서 (이 순서로 검사하며 누락 시 해당 서류를 지목한
    ///   BadRequest 반환)
    /// - **elite 선택**: TICA/CFA 서류 (있을 때만 포함)
    pub async fn submit_breeder_documents(
        &self,
        breeder_id: &str,
        request: SubmitDocumentsRequest,
    ) -> Result<DocumentSubmissionResponse, AppError> {
        let breeder = self.breeder_repo
            .find_by_id(breeder_id)
            .await?
            .ok_or_else(|| AppError::NotFound("브리더를 찾을 수 없습니다".to_string()))?;

        let level = BreederLevel::from_str_or_default(&request.level);

        // 등급별 필수 서류 검증 + 제출 목록 구성 (순서 유지)
        let submitted = Self::collect_documents(level, &request)?;

        let now = DateTime::now();
        let documents: Vec<VerificationDocument> = submitted.iter()
            .map(|(doc_type, url)| VerificationDocument {
                doc_type: *doc_type,
                url: url.clone(),
                uploaded_at: now,
            })
            .collect();

        let verification = BreederVerification {
            status: VerificationStatus::Reviewing,
            plan: breeder.verification.plan,
            level,
            documents,
            submitted_at: Some(now),
            reviewed_at: None,
            rejection_reason: None,
        };

        let verification_doc = mongodb::bson::to_document(&verification)
            .map_err(|e| AppError::InternalError(format!("인증 레코드 직렬화 실패: {}", e)))?;

        self.breeder_repo
            .update_verification(breeder_id, verification_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("브리더를 찾을 수 없습니다".to_string()))?;

        let document_urls: BTreeMap<String, String> = submitted.into_iter()
            .map(|(doc_type, url)| (doc_type.as_str().to_string(), url))
            .collect();

        log::info!("브리더 서류 제출 완료: {} (등급: {})", breeder_id, level.as_str());

        Ok(DocumentSubmissionResponse {
            breeder_id: breeder_id.to_string(),
            status: VerificationStatus::Reviewing,
            documents: document_urls,
            // 위 검증을 통과한 시점에 필수 서류는 모두 갖춰져 있습니다
            is_complete: true,
            submitted_at: now,
            estimated_review_time: REVIEW_SLA_TEXT.to_string(),
        })
    }

    /// 임시 가입 식별자 생성: `temp_{provider}_{providerId}_{epochMillis}`
    fn generate_temp_user_id(provider: AuthProvider, provider_id: &str) -> String {
        format!(
            "temp_{}_{}_{}",
            provider.as_str(),
            provider_id,
            Utc::now().timestamp_millis()
        )
    }

    /// 임시 가입 식별자 파싱
    ///
    /// `_` 기준 정확히 4개 파트여야 하며 첫 파트는 `"temp"`,
    /// 두 번째 파트는 지원하는 프로바이더 이름이어야 합니다.
    /// 그 외의 형태는 모두 BadRequest로 거부됩니다.
    fn parse_temp_user_id(temp_user_id: &str) -> Result<(AuthProvider, String), AppError> {
        let parts: Vec<&str> = temp_user_id.split('_').collect();

        if parts.len() != 4 || parts[0] != "temp" {
            return Err(AppError::ValidationError(
                "유효하지 않은 임시 가입 식별자입니다".to_string()
            ));
        }

        let provider = AuthProvider::from_str(parts[1])
            .map_err(|_| AppError::ValidationError(
                "유효하지 않은 임시 가입 식별자입니다".to_string()
            ))?;

        Ok((provider, parts[2].to_string()))
    }

    /// 등급별 필수 서류 검증 및 제출 목록 구성
    ///
    /// 반환되는 목록의 순서가 곧 저장되는 서류 순서입니다.
    fn collect_documents(
        level: BreederLevel,
        request: &SubmitDocumentsRequest,
    ) -> Result<Vec<(DocumentType, String)>, AppError> {
        let mut documents = Vec::new();

        // 공통 필수 서류
        let id_card = request.id_card_url.clone()
            .ok_or_else(|| AppError::ValidationError("신분증 서류가 필요합니다".to_string()))?;
        documents.push((DocumentType::IdCard, id_card));

        let production_license = request.animal_production_license_url.clone()
            .ok_or_else(|| AppError::ValidationError("동물생산업 허가증 서류가 필요합니다".to_string()))?;
        documents.push((DocumentType::AnimalProductionLicense, production_license));

        // elite 등급 추가 필수 서류
        if level == BreederLevel::Elite {
            let contract_sample = request.adoption_contract_sample_url.clone()
                .ok_or_else(|| AppError::ValidationError("입양 계약서 샘플 서류가 필요합니다".to_string()))?;
            documents.push((DocumentType::AdoptionContractSample, contract_sample));

            let association = request.association_document_url.clone()
                .ok_or_else(|| AppError::ValidationError("최근 협회 발급 서류가 필요합니다".to_string()))?;
            documents.push((DocumentType::AssociationDocument, association));

            let certification = request.breeder_certification_url.clone()
                .ok_or_else(|| AppError::ValidationError("브리더 인증서 서류가 필요합니다".to_string()))?;
            documents.push((DocumentType::BreederCertification, certification));

            // TICA/CFA 서류는 선택사항
            if let Some(tica_cfa) = request.tica_cfa_document_url.clone() {
                documents.push((DocumentType::TicaCfaDocument, tica_cfa));
            }
        }

        Ok(documents)
    }

    /// 로컬 비밀번호 검증 공통 로직
    ///
    /// 계정 미존재와 비밀번호 불일치는 보안상 동일한 메시지를 사용하고,
    /// 소셜 전용 계정은 프로바이더를 안내하는 별도 메시지를 사용합니다.
    fn verify_local_password(
        &self,
        password: &str,
        password_hash: Option<&str>,
        social_provider: Option<AuthProvider>,
    ) -> Result<(), AppError> {
        let Some(hash) = password_hash else {
            let provider_name = social_provider
                .map(|p| p.as_str())
                .unwrap_or("소셜");
            return Err(AppError::AuthenticationError(
                format!("{} 로그인으로 가입된 계정입니다. 소셜 로그인을 이용해주세요", provider_name)
            ));
        };

        let is_valid = bcrypt::verify(password, hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()));
        }

        Ok(())
    }

    /// 이메일이 두 컬렉션 모두에서 미사용인지 확인
    async fn ensure_email_unused(&self, email: &str) -> Result<(), AppError> {
        if self.adopter_repo.find_by_email(email).await?.is_some()
            || self.breeder_repo.find_by_email(email).await?.is_some()
        {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        Ok(())
    }

    /// 입양자 토큰 쌍 발급 + 리프레시 해시 저장
    async fn issue_and_store_adopter_tokens(
        &self,
        adopter_id: &str,
        email: &str,
    ) -> Result<TokenPair, AppError> {
        let pair = TokenService::instance().issue(adopter_id, email, UserRole::Adopter)?;
        let hash = RefreshTokenGuard::hash(&pair.refresh_token)?;
        self.adopter_repo.store_refresh_token(adopter_id, &hash).await?;
        Ok(pair)
    }

    /// 브리더 토큰 쌍 발급 + 리프레시 해시 저장
    async fn issue_and_store_breeder_tokens(
        &self,
        breeder_id: &str,
        email: &str,
    ) -> Result<TokenPair, AppError> {
        let pair = TokenService::instance().issue(breeder_id, email, UserRole::Breeder)?;
        let hash = RefreshTokenGuard::hash(&pair.refresh_token)?;
        self.breeder_repo.store_refresh_token(breeder_id, &hash).await?;
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_user_id_roundtrip() {
        let temp_id = SessionService::generate_temp_user_id(AuthProvider::Kakao, "12345");

        // temp_{provider}_{providerId}_{epochMillis} 형식
        assert!(temp_id.starts_with("temp_kakao_12345_"));
        assert_eq!(temp_id.split('_').count(), 4);

        let (provider, provider_id) = SessionService::parse_temp_user_id(&temp_id).unwrap();
        assert_eq!(provider, AuthProvider::Kakao);
        assert_eq!(provider_id, "12345");
    }

    #[test]
    fn test_temp_user_id_roundtrip_all_providers() {
        for provider in [AuthProvider::Google, AuthProvider::Naver, AuthProvider::Kakao] {
            let temp_id = SessionService::generate_temp_user_id(provider, "uid-42");
            let (parsed_provider, parsed_id) = SessionService::parse_temp_user_id(&temp_id).unwrap();
            assert_eq!(parsed_provider, provider);
            assert_eq!(parsed_id, "uid-42");
        }
    }

    #[test]
    fn test_malformed_temp_user_id_rejected() {
        // 파트 수가 4가 아닌 경우
        assert!(SessionService::parse_temp_user_id("temp_kakao_12345").is_err());
        assert!(SessionService::parse_temp_user_id("temp_kakao_123_45_999").is_err());
        assert!(SessionService::parse_temp_user_id("").is_err());

        // 첫 파트가 "temp"가 아닌 경우
        assert!(SessionService::parse_temp_user_id("perm_kakao_12345_1700000000000").is_err());

        // 알 수 없는 프로바이더
        assert!(SessionService::parse_temp_user_id("temp_facebook_12345_1700000000000").is_err());

        match SessionService::parse_temp_user_id("garbage") {
            Err(AppError::ValidationError(_)) => {}
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_documents_new_level() {
        let request = SubmitDocumentsRequest {
            level: "new".to_string(),
            id_card_url: Some("https://cdn.example.com/id.png".to_string()),
            animal_production_license_url: Some("https://cdn.example.com/license.png".to_string()),
            adoption_contract_sample_url: None,
            association_document_url: None,
            breeder_certification_url: None,
            tica_cfa_document_url: None,
        };

        let documents = SessionService::collect_documents(BreederLevel::New, &request).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].0, DocumentType::IdCard);
        assert_eq!(documents[1].0, DocumentType::AnimalProductionLicense);
    }

    #[test]
    fn test_collect_documents_missing_common_document() {
        let request = SubmitDocumentsRequest {
            level: "new".to_string(),
            id_card_url: None,
            animal_production_license_url: Some("https://cdn.example.com/license.png".to_string()),
            adoption_contract_sample_url: None,
            association_document_url: None,
            breeder_certification_url: None,
            tica_cfa_document_url: None,
        };

        match SessionService::collect_documents(BreederLevel::New, &request) {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("신분증")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_documents_elite_names_first_missing_document() {
        // 공통 서류만 제출된 elite 신청은 첫 번째 elite 필수 서류
        // (입양 계약서 샘플)를 지목해야 합니다
        let request = SubmitDocumentsRequest {
            level: "elite".to_string(),
            id_card_url: Some("https://cdn.example.com/id.png".to_string()),
            animal_production_license_url: Some("https://cdn.example.com/license.png".to_string()),
            adoption_contract_sample_url: None,
            association_document_url: None,
            breeder_certification_url: None,
            tica_cfa_document_url: None,
        };

        match SessionService::collect_documents(BreederLevel::Elite, &request) {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("입양 계약서 샘플")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_documents_elite_with_optional_tica() {
        let request = SubmitDocumentsRequest {
            level: "elite".to_string(),
            id_card_url: Some("https://cdn.example.com/id.png".to_string()),
            animal_production_license_url: Some("https://cdn.example.com/license.png".to_string()),
            adoption_contract_sample_url: Some("https://cdn.example.com/contract.pdf".to_string()),
            association_document_url: Some("https://cdn.example.com/assoc.pdf".to_string()),
            breeder_certification_url: Some("https://cdn.example.com/cert.pdf".to_string()),
            tica_cfa_document_url: Some("https://cdn.example.com/tica.pdf".to_string()),
        };

        let documents = SessionService::collect_documents(BreederLevel::Elite, &request).unwrap();
        assert_eq!(documents.len(), 6);
        assert_eq!(documents[5].0, DocumentType::TicaCfaDocument);

        // TICA/CFA 서류가 없으면 5건만 포함
        let without_tica = SubmitDocumentsRequest {
            tica_cfa_document_url: None,
            ..request
        };
        let documents = SessionService::collect_documents(BreederLevel::Elite, &without_tica).unwrap();
        assert_eq!(documents.len(), 5);
    }
}
