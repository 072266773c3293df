//! # MongoDB 차량 리포지토리 구현
//!
//! `vehicles` 컬렉션에 차량을 저장하고, Redis가 구성된 경우 단건 조회 결과를
//! 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `vehicle:{id}`
//! - **TTL**: 600초
//! - **무효화**: 저장/삭제 시 해당 키 제거
//!
//! 캐시 오류는 요청을 실패시키지 않고 경고 로그만 남깁니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use log::warn;
use mongodb::bson::doc;
use mongodb::{Collection, Cursor};
use serde::{Deserialize, Serialize};

use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::Vehicle;
use crate::errors::{AppError, AppResult};
use crate::repositories::VehicleRepository;

const COLLECTION: &str = "vehicles";
const SEQUENCE: &str = "vehicles";
const CACHE_TTL_SECONDS: u64 = 600;

/// `vehicles` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VehicleDocument {
    #[serde(rename = "_id")]
    id: i64,
    name: String,
}

impl From<VehicleDocument> for Vehicle {
    fn from(doc: VehicleDocument) -> Self {
        Vehicle::new(doc.id, doc.name)
    }
}

/// MongoDB 기반 차량 저장소
pub struct MongoVehicleRepository {
    db: Arc<Database>,
    redis: Option<Arc<RedisClient>>,
}

impl MongoVehicleRepository {
    pub fn new(db: Arc<Database>, redis: Option<Arc<RedisClient>>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<VehicleDocument> {
        self.db.collection::<VehicleDocument>(COLLECTION)
    }

    fn cache_key(id: i64) -> String {
        format!("vehicle:{}", id)
    }

    async fn invalidate_cache(&self, id: i64) {
        if let Some(redis) = &self.redis {
            if let Err(e) = redis.del(&Self::cache_key(id)).await {
                warn!("차량 캐시 무효화 실패 (id={}): {}", id, e);
            }
        }
    }
}

async fn collect(mut cursor: Cursor<VehicleDocument>) -> AppResult<Vec<Vehicle>> {
    let mut vehicles = Vec::new();
    while let Some(document) = cursor.next().await {
        let document = document.map_err(|e| AppError::DatabaseError(e.to_string()))?;
        vehicles.push(document.into());
    }
    Ok(vehicles)
}

#[async_trait]
impl VehicleRepository for MongoVehicleRepository {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect(cursor).await
    }

    async fn find_page(&self, page: u64, size: u64) -> AppResult<Vec<Vehicle>> {
        if size == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(page.saturating_mul(size))
            .limit(size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        collect(cursor).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        let cache_key = Self::cache_key(id);

        if let Some(redis) = &self.redis {
            if let Ok(Some(cached)) = redis.get::<Vehicle>(&cache_key).await {
                return Ok(Some(cached));
            }
        }

        let vehicle = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Vehicle::from);

        if let (Some(redis), Some(vehicle)) = (&self.redis, &vehicle) {
            if let Err(e) = redis.set_with_expiry(&cache_key, vehicle, CACHE_TTL_SECONDS).await {
                warn!("차량 캐시 저장 실패 (id={}): {}", id, e);
            }
        }

        Ok(vehicle)
    }

    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let document = match vehicle.id {
            Some(id) => {
                let document = VehicleDocument { id, name: vehicle.name };
                self.collection()
                    .replace_one(doc! { "_id": id }, &document)
                    .upsert(true)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
                self.db.bump_sequence(SEQUENCE, id).await?;
                document
            }
            None => {
                let id = self.db.next_sequence(SEQUENCE).await?;
                let document = VehicleDocument { id, name: vehicle.name };
                self.collection()
                    .insert_one(&document)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
                document
            }
        };

        self.invalidate_cache(document.id).await;

        Ok(document.into())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            self.invalidate_cache(id).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
