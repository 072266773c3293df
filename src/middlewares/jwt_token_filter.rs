//! JWT 인증 필터
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 접근 규칙을 적용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::jwt_filter_inner::JwtTokenFilterService;
use crate::middlewares::SecurityRules;

/// JWT 인증 필터
///
/// 토큰 검증과 사용자 로딩에는 `web::Data<AppState>`를 사용하므로
/// 애플리케이션에 상태가 등록되어 있어야 합니다.
pub struct JwtTokenFilter {
    rules: Rc<SecurityRules>,
}

impl JwtTokenFilter {
    pub fn new(rules: SecurityRules) -> Self {
        Self { rules: Rc::new(rules) }
    }
}

impl Default for JwtTokenFilter {
    fn default() -> Self {
        Self::new(SecurityRules::default_rules())
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for JwtTokenFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = JwtTokenFilterService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtTokenFilterService {
            service: Rc::new(service),
            rules: self.rules.clone(),
        }))
    }
}
