//! 인증 및 보안 서비스 모듈
//!
//! - [`JwtTokenProvider`] - HS256 토큰 발급과 검증
//! - [`UserDetailsService`] - 자격 증명 확인, 토큰 주체 로딩
//! - [`PasswordEncoder`] - bcrypt 해싱
//!
//! # Examples
//!
//! ```rust,ignore
//! let user = user_details.authenticate("admin", "password").await?;
//! let token = tokens.create_token(&user.username, user.authorities())?;
//! ```

pub mod jwt_token_provider;
pub mod password_encoder;
pub mod user_details_service;

pub use jwt_token_provider::JwtTokenProvider;
pub use password_encoder::PasswordEncoder;
pub use user_details_service::UserDetailsService;
