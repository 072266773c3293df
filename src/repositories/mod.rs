//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 핸들러와 서비스는 구체적인 저장소 대신 [`VehicleRepository`]와
//! [`UserRepository`] trait 객체에 의존합니다. 실행 시 설정에 따라
//! 인메모리 구현 또는 MongoDB 구현이 주입됩니다.
//!
//! | 구현 | 용도 |
//! |------|------|
//! | `InMemory*Repository` | 기본 실행, 테스트 |
//! | `Mongo*Repository` | 영구 저장, 차량 조회는 Redis 캐시 선택 지원 |
//!
//! # Examples
//!
//! ```rust,ignore
//! let vehicles: Arc<dyn VehicleRepository> = Arc::new(InMemoryVehicleRepository::new());
//! let saved = vehicles.save(Vehicle::unsaved("moto")).await?;
//! assert!(saved.id.is_some());
//! ```

use async_trait::async_trait;

use crate::domain::entities::{User, Vehicle};
use crate::errors::AppResult;

pub mod vehicles;
pub mod users;

pub use vehicles::{InMemoryVehicleRepository, MongoVehicleRepository};
pub use users::{InMemoryUserRepository, MongoUserRepository};

/// 차량 저장소
///
/// `save`는 삽입과 갱신을 함께 처리합니다. `id`가 없으면 새 식별자를
/// 발급하여 삽입하고, `id`가 있으면 해당 식별자로 덮어쓰거나 새로 만듭니다.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// 식별자 오름차순으로 모든 차량을 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    /// 0부터 시작하는 `page` 번호와 `size` 크기로 잘라서 반환합니다.
    async fn find_page(&self, page: u64, size: u64) -> AppResult<Vec<Vehicle>>;

    async fn count(&self) -> AppResult<u64>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle>;

    /// 삭제된 경우 `true`, 존재하지 않았으면 `false`
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// 사용자 저장소
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장합니다. 사용자명이 이미 존재하면 `ConflictError`.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn count(&self) -> AppResult<u64>;
}
