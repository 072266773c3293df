//! Authentication HTTP Handlers
//!
//! 사용자명/비밀번호로 로그인하여 JWT를 발급받습니다. 이후 요청은
//! `Authorization: Bearer <token>` 헤더로 인증합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/auth/signin \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"admin","password":"password"}'
//! ```
use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::{AuthenticationRequest, AuthenticationResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /auth/signin`
///
/// # Errors
///
/// * `AppError::BadCredentials` - 사용자가 없거나 비밀번호 불일치 (401)
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "auth",
    request_body = AuthenticationRequest,
    responses(
        (status = 200, description = "발급된 토큰", body = AuthenticationResponse),
        (status = 401, description = "Invalid username/password supplied")
    )
)]
#[post("/signin")]
pub async fn signin(
    state: web::Data<AppState>,
    payload: web::Json<AuthenticationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state
        .user_details
        .authenticate(&payload.username, &payload.password)
        .await?;

    let token = state
        .tokens
        .create_token(&user.username, user.authorities())
        .map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.username, e);
            e
        })?;

    log::info!("로그인 성공: {}", user.username);

    Ok(HttpResponse::Ok().json(AuthenticationResponse {
        username: user.username,
        token,
    }))
}
