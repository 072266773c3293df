//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트를 기능별로 묶어 등록합니다. 접근 제어는 라우트가 아니라
//! 애플리케이션 전체에 걸린 `JwtTokenFilter`의 규칙 목록이 담당합니다.
//!
//! | 그룹 | 경로 |
//! |------|------|
//! | 헬스체크 | `GET /health` |
//! | 문서 | `GET /v3/api-docs` |
//! | 인증 | `POST /auth/signin`, `GET /me` |
//! | 차량 컨트롤러 | `/v1/vehicles/**` |
//! | 차량 저장소 REST | `/vehicles/**` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 JSON 본문도 AppError 형식으로 응답
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    // Health check endpoint
    cfg.service(health_check);
    cfg.service(handlers::docs::api_docs);

    configure_auth_routes(cfg);
    configure_vehicle_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(handlers::auth::signin));
    cfg.service(handlers::users::current_user);
}

/// `/v1/vehicles` 컨트롤러와 `/vehicles` 저장소 REST를 등록합니다.
fn configure_vehicle_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/vehicles")
            .service(handlers::vehicles::list_vehicles)
            .service(handlers::vehicles::create_vehicle)
            .service(handlers::vehicles::get_vehicle)
            .service(handlers::vehicles::update_vehicle)
            .service(handlers::vehicles::delete_vehicle),
    );

    cfg.service(
        web::scope("/vehicles")
            .service(handlers::vehicle_rest::find_all)
            .service(handlers::vehicle_rest::find_by_id)
            .service(handlers::vehicle_rest::create)
            .service(handlers::vehicle_rest::replace)
            .service(handlers::vehicle_rest::delete_by_id),
    );
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "서비스 상태"))
)]
#[actix_web::get("/health")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "vehicle_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
