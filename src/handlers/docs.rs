//! OpenAPI 문서
//!
//! `GET /v3/api-docs` 에서 OpenAPI 3 JSON 문서를 제공합니다. 보호된
//! 엔드포인트는 `bearer_auth` 보안 스키마(JWT)를 요구하는 것으로 표시됩니다.

use actix_web::{get, HttpResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::dto::{
    AuthenticationRequest, AuthenticationResponse, CollectionLinks, CurrentUserResponse, EmbeddedVehicles, Link,
    PageMetadata, VehicleCollectionModel, VehicleForm, VehicleLinks, VehicleModel,
};
use crate::domain::entities::Vehicle;
use crate::handlers::{auth, users, vehicle_rest, vehicles};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "Vehicle API", description = "JWT로 보호되는 차량 REST API"),
    paths(
        vehicles::list_vehicles,
        vehicles::create_vehicle,
        vehicles::get_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        vehicle_rest::find_all,
        vehicle_rest::find_by_id,
        vehicle_rest::create,
        vehicle_rest::replace,
        vehicle_rest::delete_by_id,
        auth::signin,
        users::current_user,
        routes::health_check,
    ),
    components(schemas(
        Vehicle,
        VehicleForm,
        VehicleModel,
        VehicleLinks,
        Link,
        VehicleCollectionModel,
        EmbeddedVehicles,
        CollectionLinks,
        PageMetadata,
        AuthenticationRequest,
        AuthenticationResponse,
        CurrentUserResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "vehicles", description = "차량 CRUD"),
        (name = "vehicle-entity", description = "차량 저장소 REST (HAL)"),
        (name = "auth", description = "인증")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[get("/v3/api-docs")]
pub async fn api_docs() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
