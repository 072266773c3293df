//! # Vehicle Repository REST Handlers
//!
//! `/vehicles` 경로로 차량 저장소를 HAL 형식으로 노출합니다. 목록은
//! `_embedded.vehicles`와 페이지 정보를, 단건은 `_links.self`를 포함합니다.
//!
//! ```json
//! {
//!   "_embedded": { "vehicles": [ { "name": "moto", "_links": { "self": { "href": "http://localhost:8080/vehicles/1" }, "vehicle": { "href": "..." } } } ] },
//!   "_links": { "self": { "href": "http://localhost:8080/vehicles" } },
//!   "page": { "size": 20, "totalElements": 2, "totalPages": 1, "number": 0 }
//! }
//! ```
//!
//! `PUT /vehicles/{id}`는 없던 리소스면 만들고(201), 있던 리소스면 교체합니다(204).

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::domain::dto::{PageMetadata, VehicleCollectionModel, VehicleForm, VehicleModel};
use crate::domain::entities::Vehicle;
use crate::errors::AppError;
use crate::handlers::absolute_url;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 1000;

/// 페이지 요청 파라미터 (0부터 시작)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageRequest {
    /// 음수 페이지는 첫 페이지로 취급
    pub fn page(&self) -> u64 {
        self.page.map_or(0, |page| page.max(0) as u64)
    }

    /// 0 이하는 기본값, 상한은 1000
    pub fn size(&self) -> u64 {
        self.size
            .filter(|size| *size > 0)
            .map_or(DEFAULT_PAGE_SIZE, |size| size as u64)
            .min(MAX_PAGE_SIZE)
    }
}

fn collection_url(req: &HttpRequest) -> String {
    absolute_url(req, "/vehicles")
}

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicle-entity",
    params(PageRequest),
    responses((status = 200, body = VehicleCollectionModel))
)]
#[get("")]
pub async fn find_all(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let (page, size) = (query.page(), query.size());

    let total = state.vehicles.count().await?;
    let vehicles = state.vehicles.find_page(page, size).await?;

    let body = VehicleCollectionModel::new(&vehicles, &collection_url(&req), PageMetadata::new(size, total, page));
    Ok(HttpResponse::Ok()
        .content_type("application/hal+json")
        .json(body))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = "vehicle-entity",
    params(("id" = i64, Path, description = "차량 식별자")),
    responses(
        (status = 200, body = VehicleModel),
        (status = 404, description = "존재하지 않는 차량")
    )
)]
#[get("/{id}")]
pub async fn find_by_id(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let vehicle = state
        .vehicles
        .find_by_id(id)
        .await?
        .ok_or(AppError::VehicleNotFound(id))?;

    Ok(hal_response(HttpResponse::Ok(), &vehicle, &collection_url(&req)))
}

#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicle-entity",
    request_body = VehicleForm,
    responses((status = 201, body = VehicleModel), (status = 401, description = "인증 필요")),
    security(("bearer_auth" = []))
)]
#[post("")]
pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<VehicleForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    let saved = state
        .vehicles
        .save(Vehicle::unsaved(form.into_inner().name))
        .await?;

    Ok(created(&req, &saved))
}

#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = "vehicle-entity",
    params(("id" = i64, Path, description = "차량 식별자")),
    request_body = VehicleForm,
    responses(
        (status = 201, description = "새로 생성됨", body = VehicleModel),
        (status = 204, description = "교체됨")
    ),
    security(("bearer_auth" = []))
)]
#[put("/{id}")]
pub async fn replace(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<VehicleForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;
    let id = id.into_inner();

    let existed = state.vehicles.exists_by_id(id).await?;
    let saved = state
        .vehicles
        .save(Vehicle::new(id, form.into_inner().name))
        .await?;

    if existed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(created(&req, &saved))
    }
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = "vehicle-entity",
    params(("id" = i64, Path, description = "차량 식별자")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 403, description = "ADMIN 권한 필요"),
        (status = 404, description = "존재하지 않는 차량")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/{id}")]
pub async fn delete_by_id(state: web::Data<AppState>, id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    if state.vehicles.delete_by_id(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::VehicleNotFound(id))
    }
}

fn created(req: &HttpRequest, vehicle: &Vehicle) -> HttpResponse {
    let base = collection_url(req);
    let mut builder = HttpResponse::Created();
    if let Some(id) = vehicle.id {
        builder.insert_header((header::LOCATION, format!("{}/{}", base, id)));
    }
    hal_response(builder, vehicle, &base)
}

fn hal_response(mut builder: actix_web::HttpResponseBuilder, vehicle: &Vehicle, base: &str) -> HttpResponse {
    builder
        .content_type("application/hal+json")
        .json(VehicleModel::from_vehicle(vehicle, base))
}
