//! JWT 토큰 발급/검증 구현
//!
//! HMAC-SHA256 서명으로 사용자명과 권한 목록을 담은 액세스 토큰을 발급하고,
//! 요청마다 전달되는 Bearer 토큰을 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtSettings;
use crate::domain::models::JwtClaims;
use crate::errors::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// 만료/위조/형식 오류를 구분하지 않고 내려보내는 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "Expired or invalid JWT token";

/// JWT 토큰 제공자
///
/// 서명 키는 생성 시점에 한 번만 파생하여 보관합니다.
///
/// ```rust,ignore
/// let provider = JwtTokenProvider::new(JwtConfig::settings());
/// let token = provider.create_token("admin", &["ROLE_ADMIN".to_string()])?;
/// let claims = provider.validate_token(&token)?;
/// assert_eq!(claims.sub, "admin");
/// ```
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity_ms: i64,
}

impl JwtTokenProvider {
    pub fn new(settings: JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            validity_ms: settings.validity_ms,
        }
    }

    /// 사용자명과 권한 목록으로 서명된 토큰을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn create_token(&self, username: &str, roles: &[String]) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::milliseconds(self.validity_ms);

        let claims = JwtClaims {
            sub: username.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// `Authorization` 헤더 값에서 토큰 부분만 꺼냅니다.
    ///
    /// `Bearer ` 접두사가 없거나 토큰이 비어 있으면 `None`.
    pub fn resolve_token<'a>(&self, header_value: &'a str) -> Option<&'a str> {
        header_value
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidJwtAuthentication` - 만료, 서명 불일치, 형식 오류
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("JWT 검증 실패: {:?}", e.kind());
                AppError::InvalidJwtAuthentication(INVALID_TOKEN_MESSAGE.to_string())
            })
    }

    pub fn get_username(&self, token: &str) -> Result<String, AppError> {
        Ok(self.validate_token(token)?.sub)
    }

    /// 토큰 유효 시간 (초)
    pub fn validity_seconds(&self) -> i64 {
        self.validity_ms / 1000
    }
}
