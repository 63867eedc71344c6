//! JWT 인증 토큰 구조체 및 페어링된 세트
//!
//! RFC 7519 JWT 표준 클레임과 액세스/리프레시 2개의 용도별 토큰을
//! 페어링한 정보를 표현합니다.

use serde::{Deserialize, Serialize};

/// 리프레시 토큰을 표시하는 `token_type` 클레임 값
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 액세스 토큰과 리프레시 토큰이 동일한 구조를 공유하며,
/// `token_type` 클레임의 존재 여부가 두 토큰 종류의 유일한 구분자입니다.
/// 액세스 토큰은 `token_type`을 생략하고, 리프레시 토큰은
/// `"refresh"` 값을 가집니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (계정 ID)
/// - `email`: 계정 이메일
/// - `role`: 계정 역할 (`adopter` | `breeder`), 갱신 시 컬렉션 선택 기준
/// - `type`: 리프레시 토큰 구분자 (선택)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (계정 ID)
    pub sub: String,
    /// 계정 이메일
    pub email: String,
    /// 계정 역할 문자열
    ///
    /// 의도적으로 문자열로 유지합니다. 알 수 없는 역할 값은
    /// 역직렬화 오류가 아니라 인증 실패로 처리되어야 하기 때문입니다.
    pub role: String,
    /// 토큰 종류 구분자 (리프레시 토큰만 `"refresh"`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 리프레시 토큰 클레임인지 확인
    pub fn is_refresh(&self) -> bool {
        self.token_type.as_deref() == Some(REFRESH_TOKEN_TYPE)
    }
}

/// JWT 토큰 쌍 구조체
///
/// 로그인/갱신/소셜 가입 완료 시 클라이언트에게 전달되는 토큰 집합입니다.
/// 두 만료 시간 필드는 각각 고정값 3600초(1시간)와 604800초(7일)입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub access_token_expires_in: i64,
    /// 리프레시 토큰 만료 시간 (초)
    pub refresh_token_expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_refresh_discriminator() {
        let access = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            email: "user@example.com".to_string(),
            role: "adopter".to_string(),
            token_type: None,
            iat: 0,
            exp: 3600,
        };
        assert!(!access.is_refresh());

        let refresh = TokenClaims {
            token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
            ..access.clone()
        };
        assert!(refresh.is_refresh());

        // "refresh" 외의 값은 리프레시 토큰으로 취급하지 않습니다
        let other = TokenClaims {
            token_type: Some("access".to_string()),
            ..access
        };
        assert!(!other.is_refresh());
    }

    #[test]
    fn test_claims_type_field_serialization() {
        let refresh = TokenClaims {
            sub: "id".to_string(),
            email: "user@example.com".to_string(),
            role: "breeder".to_string(),
            token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
            iat: 100,
            exp: 200,
        };

        let json = serde_json::to_string(&refresh).unwrap();
        assert!(json.contains("\"type\":\"refresh\""));

        // 액세스 토큰은 type 필드를 직렬화하지 않습니다
        let access = TokenClaims {
            token_type: None,
            ..refresh
        };
        let json = serde_json::to_string(&access).unwrap();
        assert!(!json.contains("\"type\""));
    }
}
