use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::errors::AppError;

/// 역할 이름 접두사
const ROLE_PREFIX: &str = "ROLE_";

/// 필터 체인이 요청 확장 영역에 저장하는 인증 주체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자명 (토큰의 `sub`)
    pub username: String,

    /// 권한 목록 (`ROLE_USER`, `ROLE_ADMIN` ...)
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 권한 문자열과 정확히 일치하는 권한을 보유하고 있는지 확인
    pub fn has_authority(&self, authority: &str) -> bool {
        self.roles.iter().any(|r| r == authority)
    }

    /// 역할 보유 여부. `ADMIN`과 `ROLE_ADMIN` 모두 같은 역할로 취급합니다.
    pub fn has_role(&self, role: &str) -> bool {
        if role.starts_with(ROLE_PREFIX) {
            self.has_authority(role)
        } else {
            self.has_authority(&format!("{}{}", ROLE_PREFIX, role))
        }
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("ADMIN")
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            roles: user.roles.clone(),
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationRequired(
                "Full authentication is required to access this resource".to_string(),
            ))),
        }
    }
}
