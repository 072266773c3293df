//! 차량 REST API
//!
//! 차량(`Vehicle`) CRUD 리소스를 JWT 인증 필터 체인으로 보호하는 Rust 기반 API 서버입니다.
//!
//! # Features
//!
//! - **차량 컨트롤러**: `/v1/vehicles` CRUD
//! - **저장소 REST**: `/vehicles` HAL 형식, 페이지 지원
//! - **OpenAPI**: `/v3/api-docs`
//! - **JWT 인증**: `POST /auth/signin` 발급, Bearer 토큰 검증 필터
//! - **저장소**: 인메모리(기본) 또는 MongoDB + Redis 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ JwtTokenFilter  │ ← 토큰 검증, 접근 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증, 토큰
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory │ MongoDB│ ← 저장소 (+ Redis)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use vehicle_api::state::build_state;
//! use vehicle_api::bootstrap::DataInitializer;
//!
//! let state = build_state().await?;
//! DataInitializer::new(&state).run().await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod state;
pub mod bootstrap;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
