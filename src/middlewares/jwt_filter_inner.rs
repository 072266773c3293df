//! JwtTokenFilter 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::SecurityRules;
use crate::state::AppState;

/// 실제 인증 로직을 수행하는 서비스
pub struct JwtTokenFilterService<S> {
    pub service: Rc<S>,
    pub rules: Rc<SecurityRules>,
}

impl<S, B> Service<ServiceRequest> for JwtTokenFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let rules = self.rules.clone();

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                return Ok(reject(req, AppError::InternalError("AppState 가 등록되지 않았습니다".to_string())));
            };

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| state.tokens.resolve_token(h))
                .map(str::to_owned);

            let principal = match token {
                Some(token) => match authenticate(&state, &token).await {
                    Ok(user) => Some(user),
                    Err(err) => {
                        log::warn!("인증 실패: {}", err);
                        return Ok(reject(req, err));
                    }
                },
                None => None,
            };

            // 라우터와 같은 디코딩된 경로로 규칙을 평가
            let path = req.match_info().as_str().to_owned();
            let granted = rules
                .resolve(req.method(), &path)
                .is_granted(principal.as_ref());

            if !granted {
                let err = match &principal {
                    None => AppError::AuthenticationRequired(
                        "Full authentication is required to access this resource".to_string(),
                    ),
                    Some(user) => {
                        log::warn!("권한 부족: {} ({:?}) {} {}", user.username, user.roles, req.method(), path);
                        AppError::AccessDenied("Access is denied".to_string())
                    }
                };
                return Ok(reject(req, err));
            }

            if let Some(user) = principal {
                log::debug!("인증 성공: {}", user.username);
                req.extensions_mut().insert(user);
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 토큰을 검증하고 저장소에서 인증 주체를 구성합니다.
async fn authenticate(state: &AppState, token: &str) -> Result<AuthenticatedUser, AppError> {
    let claims = state.tokens.validate_token(token)?;
    state.user_details.get_authentication(&claims).await
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
