//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 키와 유효 시간을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정 (프로덕션)
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_VALIDITY_MS="3600000"   # 1시간
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use vehicle_api::config::JwtConfig;
//!
//! let settings = JwtConfig::settings();
//! let provider = JwtTokenProvider::new(settings);
//! ```

use std::env;
use log::warn;

/// 개발용 기본 서명 키
const DEFAULT_SECRET: &str = "secret";

/// 기본 토큰 유효 시간 (밀리초, 1시간)
const DEFAULT_VALIDITY_MS: i64 = 3_600_000;

/// 토큰 제공자에 전달되는 JWT 설정 값
///
/// 프로세스 환경 변수를 직접 읽지 않고도 `JwtTokenProvider`를
/// 구성할 수 있도록 값 타입으로 분리합니다.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    /// 토큰 유효 시간 (밀리초)
    pub validity_ms: i64,
}

impl JwtSettings {
    pub fn new(secret: impl Into<String>, validity_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            validity_ms,
        }
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET, DEFAULT_VALIDITY_MS)
    }
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 키를 반환합니다.
    ///
    /// `JWT_SECRET`이 설정되지 않은 경우 개발용 기본 키를 사용하며 경고를 남깁니다.
    pub fn secret() -> String {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET 이 설정되지 않아 개발용 기본 키를 사용합니다");
                DEFAULT_SECRET.to_string()
            }
        }
    }

    /// 토큰 유효 시간(밀리초)을 반환합니다. 기본값: 3600000 (1시간)
    pub fn validity_ms() -> i64 {
        env::var("JWT_VALIDITY_MS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_VALIDITY_MS)
    }

    /// 환경 변수로부터 [`JwtSettings`]를 구성합니다.
    pub fn settings() -> JwtSettings {
        JwtSettings::new(Self::secret(), Self::validity_ms())
    }
}
