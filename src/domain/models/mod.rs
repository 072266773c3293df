//! 인증 주체, JWT 클레임, 접근 규칙 모델

pub mod auth;
pub mod token;

pub use auth::authenticated_user::AuthenticatedUser;
pub use auth::access_rule::{Access, AccessRule, PathPattern};
pub use token::token::JwtClaims;
