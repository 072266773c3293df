//! 현재 인증 주체 조회 핸들러

use actix_web::{get, HttpResponse};

use crate::domain::dto::CurrentUserResponse;
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;

/// 현재 사용자 정보
///
/// # Endpoint
/// `GET /me`
#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    responses(
        (status = 200, body = CurrentUserResponse),
        (status = 401, description = "인증 필요")
    ),
    security(("bearer_auth" = []))
)]
#[get("/me")]
pub async fn current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse {
        username: user.username,
        roles: user.roles,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::dev::Service;
    use actix_web::{test, App, HttpMessage};

    #[actix_web::test]
    async fn test_current_user_from_extensions() {
        let app = test::init_service(
            App::new()
                .wrap_fn(|req, srv| {
                    req.extensions_mut().insert(AuthenticatedUser {
                        username: "user".into(),
                        roles: vec!["ROLE_USER".into()],
                    });
                    srv.call(req)
                })
                .service(current_user),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["username"], "user");
        assert_eq!(body["roles"][0], "ROLE_USER");
    }

    #[actix_web::test]
    async fn test_current_user_requires_principal() {
        let app = test::init_service(App::new().service(current_user)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
