//! 인증 관련 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 로그인 요청
///
/// ```json
/// { "username": "user", "password": "password" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AuthenticationRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticationResponse {
    pub username: String,
    /// Bearer 토큰으로 사용할 JWT
    pub token: String,
}

/// 현재 인증된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    pub username: String,
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_fail_validation() {
        let request = AuthenticationRequest {
            username: String::new(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
