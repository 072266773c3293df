//! 인메모리 저장소 위에서 전체 필터 체인과 라우트를 거치는 흐름 테스트

use actix_web::http::{header, StatusCode};
use actix_web::{middleware, test, web, App};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use vehicle_api::bootstrap::DataInitializer;
use vehicle_api::config::JwtSettings;
use vehicle_api::middlewares::JwtTokenFilter;
use vehicle_api::routes::configure_all_routes;
use vehicle_api::services::auth::PasswordEncoder;
use vehicle_api::state::AppState;

async fn seeded_state() -> web::Data<AppState> {
    let state = AppState::in_memory(JwtSettings::new("flow-secret", 60_000), PasswordEncoder::new(4));
    DataInitializer::new(&state).run().await.unwrap();
    web::Data::new(state)
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .wrap(JwtTokenFilter::default())
                .wrap(middleware::NormalizePath::trim())
                .configure(configure_all_routes),
        )
        .await
    };
}

macro_rules! signin {
    ($app:expr, $username:expr) => {{
        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(json!({ "username": $username, "password": "password" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        format!("Bearer {}", body["token"].as_str().unwrap())
    }};
}

#[actix_web::test]
async fn anonymous_users_can_read_seeded_vehicles() {
    let state = seeded_state().await;
    let app = app!(state);

    let vehicles: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/v1/vehicles").to_request()).await;
    assert_eq!(vehicles, json!([{ "id": 1, "name": "moto" }, { "id": 2, "name": "car" }]));

    let hal: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/vehicles").to_request()).await;
    assert_eq!(hal["_embedded"]["vehicles"][1]["name"], "car");
    assert_eq!(hal["page"]["totalElements"], 2);

    let res = test::call_service(&app, test::TestRequest::get().uri("/v3/api-docs").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn writes_require_authentication() {
    let state = seeded_state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/v1/vehicles")
        .set_json(json!({ "name": "truck" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn user_can_create_and_update_but_not_delete() {
    let state = seeded_state().await;
    let app = app!(state);
    let token = signin!(app, "user");

    let req = test::TestRequest::post()
        .uri("/v1/vehicles")
        .insert_header((header::AUTHORIZATION, token.clone()))
        .set_json(json!({ "name": "truck" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();
    assert!(location.ends_with("/v1/vehicles/3"));

    let req = test::TestRequest::put()
        .uri("/v1/vehicles/3")
        .insert_header((header::AUTHORIZATION, token.clone()))
        .set_json(json!({ "name": "pickup" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let vehicle: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/v1/vehicles/3").to_request()).await;
    assert_eq!(vehicle["name"], "pickup");

    let req = test::TestRequest::delete()
        .uri("/v1/vehicles/3")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_can_delete() {
    let state = seeded_state().await;
    let app = app!(state);
    let token = signin!(app, "admin");

    let req = test::TestRequest::delete()
        .uri("/vehicles/1")
        .insert_header((header::AUTHORIZATION, token.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri("/v1/vehicles/1")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn me_reports_current_principal() {
    let state = seeded_state().await;
    let app = app!(state);
    let token = signin!(app, "admin");

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["username"], "admin");
    assert_eq!(body["roles"], json!(["ROLE_USER", "ROLE_ADMIN"]));
}

#[actix_web::test]
async fn tampered_token_is_rejected() {
    let state = seeded_state().await;
    let app = app!(state);
    let token = signin!(app, "user");

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("{}x", token)))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn bad_credentials_are_unauthorized() {
    let state = seeded_state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({ "username": "admin", "password": "wrong" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Invalid username/password supplied");
}

#[actix_web::test]
async fn expired_token_is_rejected_even_on_public_route() {
    let state = seeded_state().await;
    let app = app!(state);

    let now = chrono::Utc::now().timestamp();
    let claims = json!({ "sub": "user", "roles": ["ROLE_USER"], "iat": now - 120, "exp": now - 60 });
    let expired = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"flow-secret")).unwrap();

    let req = test::TestRequest::get()
        .uri("/vehicles")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", expired)))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn repository_put_creates_then_replaces_for_authenticated_users() {
    let state = seeded_state().await;
    let app = app!(state);

    let req = test::TestRequest::put()
        .uri("/vehicles/9")
        .set_json(json!({ "name": "bus" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let token = signin!(app, "user");
    let req = test::TestRequest::put()
        .uri("/vehicles/9")
        .insert_header((header::AUTHORIZATION, token.clone()))
        .set_json(json!({ "name": "bus" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/vehicles/9")
        .insert_header((header::AUTHORIZATION, token))
        .set_json(json!({ "name": "coach" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let vehicle: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/v1/vehicles/9").to_request()).await;
    assert_eq!(vehicle["name"], "coach");
}

#[actix_web::test]
async fn delete_rules_hold_for_trailing_slash_and_encoded_paths() {
    let state = seeded_state().await;
    let app = app!(state);
    let token = signin!(app, "user");

    for uri in ["/v1/vehicles/1/", "/v1/%76ehicles/1", "/%76ehicles/1"] {
        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header((header::AUTHORIZATION, token.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN, "{}", uri);
    }

    let res = test::call_service(&app, test::TestRequest::get().uri("/v1/vehicles/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn exhausted_id_sequence_does_not_break_the_store() {
    let state = seeded_state().await;
    let app = app!(state);
    let token = signin!(app, "user");

    let req = test::TestRequest::put()
        .uri(&format!("/vehicles/{}", i64::MAX))
        .insert_header((header::AUTHORIZATION, token.clone()))
        .set_json(json!({ "name": "last" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/v1/vehicles")
        .insert_header((header::AUTHORIZATION, token))
        .set_json(json!({ "name": "overflow" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let vehicles: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/v1/vehicles").to_request()).await;
    assert_eq!(vehicles.as_array().unwrap().len(), 3);
}
