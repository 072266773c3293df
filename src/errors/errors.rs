//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 핸들러와 필터 체인 모두 이 타입으로
//! 실패를 표현하고, HTTP 응답 변환은 한 곳에서 이루어집니다.
//!
//! ## 응답 규칙
//!
//! | 에러 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | `VehicleNotFound` | 404 | 없음 |
//! | `InvalidJwtAuthentication` | 401 | 없음 |
//! | `BadCredentials`, `UsernameNotFound`, `AuthenticationRequired` | 401 | JSON |
//! | `AccessDenied` | 403 | JSON |
//! | `ValidationError` | 400 | JSON |
//! | `ConflictError` | 409 | JSON |
//! | 그 외 | 500 | JSON |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use vehicle_api::errors::AppError;
//!
//! async fn get(id: i64) -> Result<Vehicle, AppError> {
//!     repo.find_by_id(id).await?.ok_or(AppError::VehicleNotFound(id))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청한 차량이 존재하지 않음 (404 Not Found, 빈 본문)
    #[error("Vehicle {0} not found")]
    VehicleNotFound(i64),

    /// 만료되었거나 위조된 JWT (401 Unauthorized, 빈 본문)
    #[error("{0}")]
    InvalidJwtAuthentication(String),

    /// 로그인 자격 증명 불일치 (401 Unauthorized)
    #[error("{0}")]
    BadCredentials(String),

    /// 토큰의 주체에 해당하는 사용자가 없음 (401 Unauthorized)
    #[error("{0}")]
    UsernameNotFound(String),

    /// 보호된 리소스에 익명으로 접근 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationRequired(String),

    /// 역할 부족 (403 Forbidden)
    #[error("{0}")]
    AccessDenied(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 유일성 제약 위반 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Cache error: {0}")]
    CacheError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 본문 없이 상태 코드만 내려보내는 에러인지 여부
    fn has_empty_body(&self) -> bool {
        matches!(
            self,
            AppError::VehicleNotFound(_) | AppError::InvalidJwtAuthentication(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::VehicleNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidJwtAuthentication(_)
            | AppError::BadCredentials(_)
            | AppError::UsernameNotFound(_)
            | AppError::AuthenticationRequired(_) => StatusCode::UNAUTHORIZED,
            AppError::AccessDenied(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_)
            | AppError::CacheError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if self.has_empty_body() {
            log::debug!("handling {:?}...", self);
            return HttpResponse::build(status).finish();
        }

        if status.is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::ResponseError;

    #[test]
    fn test_vehicle_not_found_has_empty_body() {
        let response = AppError::VehicleNotFound(7).error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().try_into_bytes().unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_invalid_jwt_is_unauthorized_without_body() {
        let response = AppError::InvalidJwtAuthentication("Expired or invalid JWT token".into())
            .error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response.into_body().try_into_bytes().unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_bad_credentials_response() {
        let error = AppError::BadCredentials("Invalid username/password supplied".into());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response.into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid username/password supplied");
    }

    #[test]
    fn test_access_denied_response() {
        let response = AppError::AccessDenied("Access is denied".into()).error_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_error_response() {
        let response = AppError::ValidationError("name is required".into()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_response() {
        let response = AppError::DatabaseError("connection reset".into()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
