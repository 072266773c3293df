//! HTTP 요청 핸들러 모듈
//!
//! | 모듈 | 경로 | 설명 |
//! |------|------|------|
//! | [`vehicles`] | `/v1/vehicles` | 차량 CRUD 컨트롤러 |
//! | [`vehicle_rest`] | `/vehicles` | HAL 형식의 리포지토리 REST 노출 |
//! | [`auth`] | `/auth/signin` | 로그인, JWT 발급 |
//! | [`users`] | `/me` | 현재 인증 주체 조회 |
//! | [`docs`] | `/v3/api-docs` | OpenAPI 문서 |
//!
//! 핸들러는 `web::Data<AppState>`로 리포지토리와 서비스에 접근하며,
//! 모든 실패는 `AppError`로 반환합니다.

use actix_web::http::header;
use actix_web::{web, HttpRequest};

use crate::state::AppState;

pub mod vehicles;
pub mod vehicle_rest;
pub mod auth;
pub mod users;
pub mod docs;

/// 요청의 스킴과 호스트를 기준으로 절대 URL을 만듭니다.
///
/// 프록시 헤더(`Forwarded`, `X-Forwarded-*`)는 `TRUST_FORWARDED_HEADERS`가
/// 켜진 경우에만 따르고, 그 외에는 `Host` 헤더와 서버 설정을 사용합니다.
pub(crate) fn absolute_url(req: &HttpRequest, path: &str) -> String {
    let trusted = req
        .app_data::<web::Data<AppState>>()
        .is_some_and(|state| state.trust_forwarded_headers);

    if trusted {
        let info = req.connection_info();
        return format!("{}://{}{}", info.scheme(), info.host(), path);
    }

    let scheme = req
        .uri()
        .scheme_str()
        .unwrap_or(if req.app_config().secure() { "https" } else { "http" });
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| req.uri().authority().map(|a| a.as_str()))
        .unwrap_or_else(|| req.app_config().host());

    format!("{}://{}{}", scheme, host, path)
}
