//! bcrypt 비밀번호 인코더

use crate::config::PasswordConfig;
use crate::errors::AppError;

/// bcrypt 해시 생성과 비교를 담당합니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordEncoder {
    cost: u32,
}

impl PasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경의 cost 설정을 사용하는 인코더
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn encode(&self, raw: &str) -> Result<String, AppError> {
        bcrypt::hash(raw, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 해시 형식이 잘못된 경우에도 `false`를 반환합니다.
    pub fn matches(&self, raw: &str, encoded: &str) -> bool {
        let verify_start = std::time::Instant::now();
        let result = bcrypt::verify(raw, encoded).unwrap_or_else(|e| {
            log::warn!("비밀번호 해시 검증 불가: {}", e);
            false
        });
        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        result
    }
}

impl Default for PasswordEncoder {
    fn default() -> Self {
        Self::from_env()
    }
}
