//! 애플리케이션 공유 상태
//!
//! 리포지토리와 인증 서비스를 한 번 구성하여 `web::Data<AppState>`로
//! 모든 워커가 공유합니다. 저장소 구현은 [`StorageConfig`]에 따라 선택됩니다.

use std::sync::Arc;

use log::{info, warn};

use crate::caching::redis::RedisClient;
use crate::config::{JwtConfig, JwtSettings, ServerConfig, StorageBackend, StorageConfig};
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::{
    InMemoryUserRepository, InMemoryVehicleRepository, MongoUserRepository, MongoVehicleRepository,
    UserRepository, VehicleRepository,
};
use crate::services::auth::{JwtTokenProvider, PasswordEncoder, UserDetailsService};

pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<JwtTokenProvider>,
    pub user_details: Arc<UserDetailsService>,
    /// 링크 생성 시 프록시 헤더를 신뢰할지 여부
    pub trust_forwarded_headers: bool,
}

impl AppState {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        users: Arc<dyn UserRepository>,
        jwt: JwtSettings,
        encoder: PasswordEncoder,
    ) -> Self {
        let user_details = UserDetailsService::new(users.clone(), encoder);

        Self {
            vehicles,
            users,
            tokens: Arc::new(JwtTokenProvider::new(jwt)),
            user_details: Arc::new(user_details),
            trust_forwarded_headers: false,
        }
    }

    pub fn with_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }

    /// 인메모리 저장소로 구성된 상태. 로컬 실행과 테스트에서 사용합니다.
    pub fn in_memory(jwt: JwtSettings, encoder: PasswordEncoder) -> Self {
        Self::new(
            Arc::new(InMemoryVehicleRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            jwt,
            encoder,
        )
    }
}

/// 환경 변수 설정으로 애플리케이션 상태를 구성합니다.
///
/// # Errors
///
/// * `AppError::DatabaseError` - MongoDB 연결 실패
pub async fn build_state() -> AppResult<AppState> {
    let jwt = JwtConfig::settings();
    let encoder = PasswordEncoder::from_env();

    let state = match StorageConfig::backend() {
        StorageBackend::Memory => {
            info!("📦 인메모리 저장소 사용");
            AppState::in_memory(jwt, encoder)
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(
                Database::new(&StorageConfig::mongodb_uri(), &StorageConfig::database_name()).await?,
            );
            let redis = connect_cache().await;

            let users = MongoUserRepository::new(database.clone());
            users.create_indexes().await?;

            AppState::new(
                Arc::new(MongoVehicleRepository::new(database, redis)),
                Arc::new(users),
                jwt,
                encoder,
            )
        }
    };

    Ok(state.with_forwarded_headers(ServerConfig::trust_forwarded_headers()))
}

/// Redis 연결은 선택 사항입니다. 실패하면 캐시 없이 동작합니다.
async fn connect_cache() -> Option<Arc<RedisClient>> {
    let url = StorageConfig::redis_url()?;

    match RedisClient::new(&url).await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
            None
        }
    }
}
