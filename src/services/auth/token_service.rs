//! JWT 토큰 발급 서비스 구현
//!
//! 계정 식별 정보(`{subject_id, email, role}`)로부터 액세스/리프레시
//! 토큰 쌍을 발급하고 검증합니다. 두 토큰은 동일한 HMAC-SHA256 비밀키로
//! 서명되며, 페이로드의 `type` 클레임 존재 여부가 유일한 구분자입니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::config::{JwtConfig, UserRole};
use crate::domain::models::token::{TokenClaims, TokenPair, REFRESH_TOKEN_TYPE};
use crate::core::errors::AppError;

/// JWT 토큰 발급 서비스
///
/// 액세스 토큰(1시간)과 리프레시 토큰(7일)을 발급합니다.
/// 부수 효과가 없는 순수 연산이며, 서명 비밀키와 현재 시각에만
/// 의존합니다. 리프레시 토큰의 저장(해시화)은 세션 서비스의 책임입니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 계정 식별 정보로 토큰 쌍 발급 (액세스 + 리프레시)
    ///
    /// # Arguments
    ///
    /// * `subject_id` - 계정 ID (클레임의 `sub`)
    /// * `email` - 계정 이메일
    /// * `role` - 계정 역할 (갱신 시 컬렉션 선택 기준)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - 액세스/리프레시 토큰과 만료 정보
    ///   (`access_token_expires_in`은 항상 3600, `refresh_token_expires_in`은
    ///   항상 604800)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let pair = token_service.issue(&adopter_id, &adopter.email, UserRole::Adopter)?;
    /// assert_eq!(pair.access_token_expires_in, 3600);
    /// ```
    pub fn issue(&self, subject_id: &str, email: &str, role: UserRole) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(subject_id, email, role)?;
        let refresh_token = self.generate_refresh_token(subject_id, email, role)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_token_expires_in: JwtConfig::ACCESS_TOKEN_TTL_SECS,
            refresh_token_expires_in: JwtConfig::REFRESH_TOKEN_TTL_SECS,
        })
    }

    /// JWT 액세스 토큰 생성 (1시간 유효)
    ///
    /// 페이로드: `{sub, email, role, iat, exp}` (`type` 클레임 없음).
    fn generate_access_token(&self, subject_id: &str, email: &str, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(JwtConfig::ACCESS_TOKEN_TTL_SECS);

        let claims = TokenClaims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            token_type: None,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.sign(&claims)
            .map_err(|e| AppError::InternalError(format!("액세스 토큰 생성 실패: {}", e)))
    }

    /// JWT 리프레시 토큰 생성 (7일 유효)
    ///
    /// 페이로드: `{sub, email, role, type: "refresh", iat, exp}`.
    ///
    /// # Security
    ///
    /// 발급된 원문은 클라이언트에게만 전달되며, 서버에는 bcrypt 해시만
    /// 저장됩니다 (세션 서비스 담당).
    fn generate_refresh_token(&self, subject_id: &str, email: &str, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(JwtConfig::REFRESH_TOKEN_TTL_SECS);

        let claims = TokenClaims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.sign(&claims)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 클레임을 HMAC-SHA256으로 서명
    fn sign(&self, claims: &TokenClaims) -> Result<String, jsonwebtoken::errors::Error> {
        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, claims, &encoding_key)
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명과 만료 시각을 검증합니다. 실패 원인에 따라 구분된 메시지를
    /// 반환하여 클라이언트가 재로그인/재시도 여부를 분기할 수 있게 합니다:
    ///
    /// - 만료: "토큰이 만료되었습니다"
    /// - 형식 오류: "유효하지 않은 토큰 형식입니다"
    /// - 그 외 (서명 불일치 등): "유효하지 않은 토큰입니다"
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료/형식 오류/서명 불일치
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::Utf8(_) => {
                    AppError::AuthenticationError("유효하지 않은 토큰 형식입니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을
    /// 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_pair_expiry_contract() {
        let service = TokenService::instance();
        let pair = service
            .issue("507f1f77bcf86cd799439011", "lover@example.com", UserRole::Adopter)
            .unwrap();

        assert_eq!(pair.access_token_expires_in, 3600);
        assert_eq!(pair.refresh_token_expires_in, 604800);
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[test]
    fn test_issued_tokens_roundtrip_claims() {
        let service = TokenService::instance();
        let pair = service
            .issue("507f1f77bcf86cd799439011", "cattery@example.com", UserRole::Breeder)
            .unwrap();

        let access = service.verify(&pair.access_token).unwrap();
        assert_eq!(access.sub, "507f1f77bcf86cd799439011");
        assert_eq!(access.email, "cattery@example.com");
        assert_eq!(access.role, "breeder");
        assert!(!access.is_refresh());

        let refresh = service.verify(&pair.refresh_token).unwrap();
        assert_eq!(refresh.sub, access.sub);
        assert_eq!(refresh.email, access.email);
        assert!(refresh.is_refresh());
    }

    #[test]
    fn test_expired_token_distinct_message() {
        let service = TokenService::instance();

        // 만료 leeway(60초)를 넘긴 과거 시각의 토큰을 직접 서명
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            email: "lover@example.com".to_string(),
            role: "adopter".to_string(),
            token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
            iat: now - 1000,
            exp: now - 300,
        };
        let expired = service.sign(&claims).unwrap();

        match service.verify(&expired) {
            Err(AppError::AuthenticationError(msg)) => {
                assert!(msg.contains("만료"));
            }
            other => panic!("Expected expired-token error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_token_distinct_message() {
        let service = TokenService::instance();

        match service.verify("not-a-jwt") {
            Err(AppError::AuthenticationError(msg)) => {
                assert!(msg.contains("형식"));
            }
            other => panic!("Expected malformed-token error, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = TokenService::instance();
        let pair = service
            .issue("507f1f77bcf86cd799439011", "lover@example.com", UserRole::Adopter)
            .unwrap();

        // 서명 부분을 훼손
        let mut parts: Vec<&str> = pair.access_token.split('.').collect();
        let tampered_sig = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
        parts[2] = tampered_sig;
        let tampered = parts.join(".");

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
