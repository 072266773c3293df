//! # Domain Entities Module
//!
//! 리포지토리가 저장하고 조회하는 핵심 엔티티들을 정의합니다.
//!
//! - [`vehicles::Vehicle`] - CRUD 대상 리소스
//! - [`users::User`] - 인증 주체 (사용자명, bcrypt 해시, 역할 목록)

pub mod vehicles;
pub mod users;

pub use vehicles::Vehicle;
pub use users::User;
