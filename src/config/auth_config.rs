//! # Authentication Configuration Module
//!
//! OAuth 프로바이더(Google/Naver/Kakao), JWT 토큰, 계정 역할 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! ### OAuth 프로바이더 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//!
//! export NAVER_CLIENT_ID="your-naver-client-id"
//! export NAVER_CLIENT_SECRET="your-naver-client-secret"
//! export NAVER_REDIRECT_URI="http://localhost:8080/api/v1/auth/naver/callback"
//!
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! export KAKAO_CLIENT_SECRET="your-kakao-client-secret"
//! export KAKAO_REDIRECT_URI="http://localhost:8080/api/v1/auth/kakao/callback"
//!
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, KakaoOAuthConfig, AuthProvider, UserRole};
//!
//! let secret = JwtConfig::secret();
//! let kakao_auth_uri = KakaoOAuthConfig::auth_uri();
//! let provider = AuthProvider::from_str("kakao")?;
//! let role = UserRole::from_str("breeder")?;
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키와 액세스/리프레시 토큰의 수명을 관리합니다.
/// 액세스 토큰(1시간)과 리프레시 토큰(7일)의 수명은 API 계약의 일부로
/// 고정 상수이며, 응답의 `expires_in` 필드 값과 항상 일치합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 수명 (초 단위, 1시간)
    pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

    /// 리프레시 토큰 수명 (초 단위, 7일)
    pub const REFRESH_TOKEN_TTL_SECS: i64 = 604800;

    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 액세스 토큰과 리프레시 토큰 모두 동일한 키로 서명되며,
    /// 두 토큰의 구분은 페이로드의 `token_type` 클레임으로만 이루어집니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본 키를 사용하며,
    /// 프로덕션에서는 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// export JWT_SECRET="your-super-secret-256-bit-key"
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }
}

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID")
            .expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 엔드포인트 URI를 반환합니다.
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google UserInfo API 엔드포인트 URI를 반환합니다.
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// Naver OAuth 2.0 설정을 관리하는 구조체
///
/// Naver Developers 콘솔에서 발급받은 애플리케이션 정보를 관리합니다.
pub struct NaverOAuthConfig;

impl NaverOAuthConfig {
    /// Naver OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `NAVER_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("NAVER_CLIENT_ID")
            .expect("NAVER_CLIENT_ID must be set")
    }

    /// Naver OAuth Client Secret을 반환합니다.
    ///
    /// # Panics
    ///
    /// `NAVER_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("NAVER_CLIENT_SECRET")
            .expect("NAVER_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// # Panics
    ///
    /// `NAVER_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("NAVER_REDIRECT_URI")
            .expect("NAVER_REDIRECT_URI must be set")
    }

    /// Naver OAuth 인증 엔드포인트 URI를 반환합니다.
    pub fn auth_uri() -> String {
        env::var("NAVER_AUTH_URI")
            .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/authorize".to_string())
    }

    /// Naver OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    pub fn token_uri() -> String {
        env::var("NAVER_TOKEN_URI")
            .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/token".to_string())
    }

    /// Naver 회원 프로필 조회 API 엔드포인트 URI를 반환합니다.
    pub fn userinfo_uri() -> String {
        env::var("NAVER_USERINFO_URI")
            .unwrap_or_else(|_| "https://openapi.naver.com/v1/nid/me".to_string())
    }
}

/// Kakao OAuth 2.0 설정을 관리하는 구조체
///
/// Kakao Developers 콘솔에서 발급받은 REST API 키 정보를 관리합니다.
/// Kakao는 이메일 제공 동의가 선택 항목이므로, 이메일이 없는 프로필에
/// 대한 대체 처리가 서비스 계층에 존재합니다.
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// Kakao REST API 키 (Client ID)를 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("KAKAO_CLIENT_ID")
            .expect("KAKAO_CLIENT_ID must be set")
    }

    /// Kakao Client Secret을 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("KAKAO_CLIENT_SECRET")
            .expect("KAKAO_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// # Panics
    ///
    /// `KAKAO_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("KAKAO_REDIRECT_URI")
            .expect("KAKAO_REDIRECT_URI must be set")
    }

    /// Kakao OAuth 인증 엔드포인트 URI를 반환합니다.
    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    /// Kakao OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    /// Kakao 사용자 정보 조회 API 엔드포인트 URI를 반환합니다.
    pub fn userinfo_uri() -> String {
        env::var("KAKAO_USERINFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }
}

/// OAuth 일반 설정을 관리하는 구조체
///
/// 모든 OAuth 프로바이더에 공통으로 적용되는 보안 설정을 관리합니다.
/// CSRF 공격 방지를 위한 state 매개변수 생성에 사용됩니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 생성용 비밀키를 반환합니다.
    ///
    /// CSRF 공격 방지를 위한 state 매개변수 생성 및 검증에 사용됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며,
    /// 프로덕션에서는 경고 로그가 출력됩니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }
}

/// 지원하는 소셜 인증 공급자를 나타내는 열거형
///
/// 소셜 연동 정보의 저장과 임시 가입 식별자 인코딩에 사용됩니다.
/// 직렬화 시 소문자 문자열(`google`/`naver`/`kakao`)로 표현되며,
/// 임시 식별자 `temp_{provider}_{providerId}_{epochMillis}`의
/// provider 부분과 동일한 표기를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google OAuth 2.0 인증
    Google,
    /// Naver OAuth 2.0 인증
    Naver,
    /// Kakao OAuth 2.0 인증
    Kakao,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 지원되는 값
    ///
    /// - `"google"` → `AuthProvider::Google`
    /// - `"naver"` → `AuthProvider::Naver`
    /// - `"kakao"` → `AuthProvider::Kakao`
    ///
    /// 대소문자를 구분하지 않으며, 지원하지 않는 프로바이더는 에러를 반환합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "naver" => Ok(AuthProvider::Naver),
            "kakao" => Ok(AuthProvider::Kakao),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Naver => "naver",
            AuthProvider::Kakao => "kakao",
        }
    }
}

/// 계정 역할을 나타내는 열거형
///
/// 저장소 수준에서 입양자와 브리더는 별도 컬렉션으로 분리되어 있으며,
/// 이 열거형은 토큰 클레임의 `role` 필드와 컬렉션 선택의 기준이 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 입양자 계정 (`adopters` 컬렉션)
    Adopter,
    /// 브리더 계정 (`breeders` 컬렉션)
    Breeder,
}

impl UserRole {
    /// 문자열에서 UserRole을 생성합니다.
    ///
    /// 토큰 페이로드의 역할 검증에 사용되며, 알 수 없는 값은
    /// 호출 측에서 인증 실패로 처리됩니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "adopter" => Ok(UserRole::Adopter),
            "breeder" => Ok(UserRole::Breeder),
            _ => Err(format!("Unsupported user role: {}", s)),
        }
    }

    /// UserRole을 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Adopter => "adopter",
            UserRole::Breeder => "breeder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("naver").unwrap(), AuthProvider::Naver);
        assert_eq!(AuthProvider::from_str("kakao").unwrap(), AuthProvider::Kakao);

        // 대소문자 무관 테스트
        assert_eq!(AuthProvider::from_str("KAKAO").unwrap(), AuthProvider::Kakao);
        assert_eq!(AuthProvider::from_str("Google").unwrap(), AuthProvider::Google);

        // 지원하지 않는 프로바이더 테스트
        assert!(AuthProvider::from_str("facebook").is_err());
        assert!(AuthProvider::from_str("unknown").is_err());
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        let providers = ["google", "naver", "kakao"];

        for &provider_str in &providers {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        let provider = AuthProvider::Kakao;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"kakao\"");

        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }

    #[test]
    fn test_user_role_from_string() {
        assert_eq!(UserRole::from_str("adopter").unwrap(), UserRole::Adopter);
        assert_eq!(UserRole::from_str("breeder").unwrap(), UserRole::Breeder);
        assert_eq!(UserRole::from_str("Breeder").unwrap(), UserRole::Breeder);

        // 알 수 없는 역할은 인증 실패로 이어져야 합니다
        assert!(UserRole::from_str("admin").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn test_user_role_roundtrip() {
        for &role_str in &["adopter", "breeder"] {
            let role = UserRole::from_str(role_str).unwrap();
            assert_eq!(role.as_str(), role_str);
        }
    }

    #[test]
    fn test_jwt_ttl_constants() {
        // 토큰 수명은 API 계약의 일부입니다
        assert_eq!(JwtConfig::ACCESS_TOKEN_TTL_SECS, 3600);
        assert_eq!(JwtConfig::REFRESH_TOKEN_TTL_SECS, 604800);
    }
}
