//! 차량 리포지토리 구현

pub mod memory_repo;
pub mod mongo_repo;

pub use memory_repo::InMemoryVehicleRepository;
pub use mongo_repo::MongoVehicleRepository;
