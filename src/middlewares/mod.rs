//! 미들웨어 모듈
//!
//! 모든 요청 앞에서 동작하는 JWT 인증 필터를 제공합니다.
//! 필터는 모든 요청에 대해 다음 순서로 동작합니다.
//!
//! 1. `Authorization: Bearer <token>` 헤더에서 토큰 추출
//! 2. 토큰이 있으면 검증 후 저장소에서 사용자를 읽어 인증 주체 구성
//! 3. [`SecurityRules`]에서 처음으로 일치하는 규칙으로 접근 허용 여부 판단
//! 4. 허용되면 인증 주체를 request extension에 저장하고 핸들러로 전달
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::{JwtTokenFilter, SecurityRules};
//!
//! App::new()
//!     .app_data(state.clone())
//!     .wrap(JwtTokenFilter::new(SecurityRules::default_rules()))
//!     .configure(configure_all_routes)
//! ```
//!
//! 세션, CSRF, HTTP Basic 인증은 사용하지 않습니다.

pub mod jwt_token_filter;
pub mod security_rules;
mod jwt_filter_inner;

pub use jwt_token_filter::JwtTokenFilter;
pub use security_rules::SecurityRules;
