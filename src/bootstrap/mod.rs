//! 애플리케이션 시작 시 실행되는 초기화 작업

pub mod data_initializer;

pub use data_initializer::DataInitializer;
