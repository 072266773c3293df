//! # Configuration Module
//!
//! 차량 API 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 구조체로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 서명 키와 유효 시간 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_VALIDITY_MS="3600000"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"      # memory (기본값) | mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="vehicle_api_dev"
//! export REDIS_URL="redis://localhost:6379"  # 선택 사항, 차량 조회 캐시
//! export SEED_DATA="true"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use vehicle_api::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let settings = JwtConfig::settings();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
