//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `AppState`에 `Arc`로 담겨 핸들러와 보안 필터에 공유됩니다.

pub mod auth;
