//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문으로 오가는 타입들입니다.
//!
//! - [`vehicles`] - 차량 입력 폼과 HAL 표현
//! - [`auth`] - 로그인 요청/응답, 현재 사용자 정보

pub mod vehicles;
pub mod auth;

pub use vehicles::*;
pub use auth::*;
