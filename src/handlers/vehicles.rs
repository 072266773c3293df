//! # Vehicle CRUD HTTP Handlers
//!
//! `/v1/vehicles` 아래의 차량 컨트롤러입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/v1/vehicles` | 전체 목록 | 200 OK |
//! | `POST` | `/v1/vehicles` | 생성, `Location` 헤더 | 201 Created |
//! | `GET` | `/v1/vehicles/{id}` | 단건 조회 | 200 OK / 404 |
//! | `PUT` | `/v1/vehicles/{id}` | 이름 수정 | 204 No Content / 404 |
//! | `DELETE` | `/v1/vehicles/{id}` | 삭제 (`ADMIN`) | 204 No Content / 404 |
//!
//! 존재하지 않는 차량은 본문 없는 404로 응답합니다.

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::VehicleForm;
use crate::domain::entities::Vehicle;
use crate::errors::AppError;
use crate::handlers::absolute_url;
use crate::state::AppState;

/// 차량 목록
#[utoipa::path(
    get,
    path = "/v1/vehicles",
    tag = "vehicles",
    responses((status = 200, description = "모든 차량", body = [Vehicle]))
)]
#[get("")]
pub async fn list_vehicles(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let vehicles = state.vehicles.find_all().await?;
    Ok(HttpResponse::Ok().json(vehicles))
}

/// 차량 생성
#[utoipa::path(
    post,
    path = "/v1/vehicles",
    tag = "vehicles",
    request_body = VehicleForm,
    responses(
        (status = 201, description = "생성됨, Location 헤더에 새 리소스 주소"),
        (status = 400, description = "잘못된 입력"),
        (status = 401, description = "인증 필요")
    ),
    security(("bearer_auth" = []))
)]
#[post("")]
pub async fn create_vehicle(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<VehicleForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    let saved = state
        .vehicles
        .save(Vehicle::unsaved(form.into_inner().name))
        .await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::InternalError("저장된 차량에 식별자가 없습니다".to_string()))?;

    log::info!("차량 생성: {} ({})", saved.name, id);

    let location = absolute_url(&req, &format!("/v1/vehicles/{}", id));
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .finish())
}

/// 차량 단건 조회
#[utoipa::path(
    get,
    path = "/v1/vehicles/{id}",
    tag = "vehicles",
    params(("id" = i64, Path, description = "차량 식별자")),
    responses(
        (status = 200, body = Vehicle),
        (status = 404, description = "존재하지 않는 차량")
    )
)]
#[get("/{id}")]
pub async fn get_vehicle(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let vehicle = state
        .vehicles
        .find_by_id(id)
        .await?
        .ok_or(AppError::VehicleNotFound(id))?;

    Ok(HttpResponse::Ok().json(vehicle))
}

/// 차량 이름 수정
#[utoipa::path(
    put,
    path = "/v1/vehicles/{id}",
    tag = "vehicles",
    params(("id" = i64, Path, description = "차량 식별자")),
    request_body = VehicleForm,
    responses(
        (status = 204, description = "수정됨"),
        (status = 404, description = "존재하지 않는 차량")
    ),
    security(("bearer_auth" = []))
)]
#[put("/{id}")]
pub async fn update_vehicle(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<VehicleForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;
    let id = id.into_inner();

    let mut existed = state
        .vehicles
        .find_by_id(id)
        .await?
        .ok_or(AppError::VehicleNotFound(id))?;
    existed.name = form.into_inner().name;

    state.vehicles.save(existed).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 차량 삭제
#[utoipa::path(
    delete,
    path = "/v1/vehicles/{id}",
    tag = "vehicles",
    params(("id" = i64, Path, description = "차량 식별자")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 403, description = "ADMIN 권한 필요"),
        (status = 404, description = "존재하지 않는 차량")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/{id}")]
pub async fn delete_vehicle(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    if !state.vehicles.delete_by_id(id).await? {
        return Err(AppError::VehicleNotFound(id));
    }

    log::info!("차량 삭제: {}", id);
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::config::JwtSettings;
    use crate::services::auth::PasswordEncoder;

    async fn seeded_state() -> web::Data<AppState> {
        let state = AppState::in_memory(JwtSettings::default(), PasswordEncoder::new(4));
        state.vehicles.save(Vehicle::unsaved("moto")).await.unwrap();
        state.vehicles.save(Vehicle::unsaved("car")).await.unwrap();
        web::Data::new(state)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new().app_data($state.clone()).service(
                    web::scope("/v1/vehicles")
                        .service(list_vehicles)
                        .service(create_vehicle)
                        .service(get_vehicle)
                        .service(update_vehicle)
                        .service(delete_vehicle),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_vehicles() {
        let state = seeded_state().await;
        let app = app!(state);

        let vehicles: Vec<Vehicle> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/v1/vehicles").to_request()).await;

        assert_eq!(vehicles, vec![Vehicle::new(1, "moto"), Vehicle::new(2, "car")]);
    }

    #[actix_web::test]
    async fn test_create_returns_location() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/v1/vehicles")
            .insert_header((header::HOST, "example.com"))
            .set_json(serde_json::json!({ "name": "truck" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
            "http://example.com/v1/vehicles/3"
        );
        assert!(test::read_body(res).await.is_empty());
    }

    #[actix_web::test]
    async fn test_create_rejects_blank_name() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/v1/vehicles")
            .set_json(serde_json::json!({ "name": "" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_missing_vehicle_is_empty_404() {
        let state = seeded_state().await;
        let app = app!(state);

        let res = test::call_service(&app, test::TestRequest::get().uri("/v1/vehicles/99").to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(res).await.is_empty());
    }

    #[actix_web::test]
    async fn test_update_then_delete() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri("/v1/vehicles/1")
            .set_json(serde_json::json!({ "name": "scooter" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.vehicles.find_by_id(1).await.unwrap().unwrap().name, "scooter");

        let req = test::TestRequest::delete().uri("/v1/vehicles/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/v1/vehicles/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_missing_vehicle() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri("/v1/vehicles/42")
            .set_json(serde_json::json!({ "name": "ghost" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
