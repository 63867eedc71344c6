//! 리프레시 토큰 저장 해시 가드
//!
//! 리프레시 토큰을 영속화하기 전 단방향 해시로 변환하고,
//! 제시된 원문 토큰을 저장된 해시와 대조합니다.
//!
//! ## 해시 구성
//!
//! `bcrypt(hex(sha256(raw_token)), cost = 10)`
//!
//! JWT 리프레시 토큰은 bcrypt의 72바이트 입력 제한보다 길고, 같은 계정의
//! 토큰들은 앞부분(헤더 + `sub` 클레임)이 동일하므로 bcrypt에 바로 넣으면
//! 절단된 접두사만 비교됩니다. SHA-256 사전 다이제스트(64자 hex)가 이
//! 제한 안에서 토큰 전체를 구분합니다.
//!
//! ## 동등성 검사
//!
//! bcrypt는 솔트를 포함하므로 같은 토큰을 두 번 해시하면 서로 다른
//! 결과가 나옵니다. 해시 문자열 비교는 의미가 없으며, 동등성은 오직
//! [`RefreshTokenGuard::verify`]로만 판정해야 합니다.

use sha2::{Digest, Sha256};
use crate::core::errors::AppError;

/// 리프레시 토큰 해시/검증 가드
///
/// 상태가 없는 순수 연산 모음입니다.
pub struct RefreshTokenGuard;

impl RefreshTokenGuard {
    /// 고정 bcrypt cost (10 라운드)
    pub const HASH_COST: u32 = 10;

    /// 원문 리프레시 토큰을 저장용 해시로 변환
    ///
    /// 솔트가 포함되므로 호출할 때마다 다른 해시가 생성됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 해싱 실패
    pub fn hash(raw_token: &str) -> Result<String, AppError> {
        bcrypt::hash(Self::digest(raw_token), Self::HASH_COST)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 해싱 실패: {}", e)))
    }

    /// 원문 토큰이 저장된 해시와 일치하는지 검증
    ///
    /// 해시 형식이 손상된 경우에도 에러 대신 불일치(false)로 처리합니다.
    pub fn verify(raw_token: &str, hashed_token: &str) -> bool {
        bcrypt::verify(Self::digest(raw_token), hashed_token).unwrap_or(false)
    }

    /// SHA-256 사전 다이제스트 (64자 hex)
    fn digest(raw_token: &str) -> String {
        format!("{:x}", Sha256::digest(raw_token.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_roundtrip() {
        let raw = "eyJhbGciOiJIUzI1NiJ9.refresh-token-sample";
        let hashed = RefreshTokenGuard::hash(raw).unwrap();

        assert!(RefreshTokenGuard::verify(raw, &hashed));
        assert!(!RefreshTokenGuard::verify("different-token", &hashed));
    }

    #[test]
    fn test_hash_is_salted() {
        let raw = "same-refresh-token";
        let first = RefreshTokenGuard::hash(raw).unwrap();
        let second = RefreshTokenGuard::hash(raw).unwrap();

        // 솔트 때문에 해시 문자열은 매번 다르지만 둘 다 검증은 통과
        assert_ne!(first, second);
        assert!(RefreshTokenGuard::verify(raw, &first));
        assert!(RefreshTokenGuard::verify(raw, &second));
    }

    #[test]
    fn test_long_tokens_with_shared_prefix_are_distinguished() {
        // 같은 계정의 JWT 토큰처럼 앞 72바이트가 동일한 두 토큰
        let prefix = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiI1MDdmMWY3N2JjZjg2Y2Q3OTk0MzkwMTEi";
        let first = format!("{}.first-signature", prefix);
        let second = format!("{}.second-signature", prefix);

        let hashed = RefreshTokenGuard::hash(&first).unwrap();
        assert!(RefreshTokenGuard::verify(&first, &hashed));
        assert!(!RefreshTokenGuard::verify(&second, &hashed));
    }

    #[test]
    fn test_verify_with_garbage_hash_is_false() {
        assert!(!RefreshTokenGuard::verify("token", "not-a-bcrypt-hash"));
    }
}
