//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 핵심 객체 (Vehicle, User)
//! ├── dto       - 요청/응답 데이터 전송 객체, HAL 표현
//! └── models    - 인증 주체, JWT 클레임, 접근 규칙
//! ```
//!
//! 엔티티는 저장소 구현과 분리되어 있으며, MongoDB 문서 형태로의 변환은
//! 각 리포지토리 구현이 담당합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{User, Vehicle};
pub use dto::{AuthenticationRequest, AuthenticationResponse, CurrentUserResponse, VehicleForm};
pub use models::{Access, AccessRule, AuthenticatedUser, JwtClaims, PathPattern};
