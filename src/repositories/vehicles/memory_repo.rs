//! 인메모리 차량 리포지토리
//!
//! 프로세스 메모리에 차량을 보관합니다. 별도 인프라 없이 실행하거나
//! 테스트할 때 사용되며, 재시작하면 데이터가 사라집니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::Vehicle;
use crate::errors::{AppError, AppResult};
use crate::repositories::VehicleRepository;

#[derive(Default)]
struct VehicleTable {
    rows: BTreeMap<i64, Vehicle>,
    sequence: i64,
}

/// `BTreeMap` 기반 차량 저장소. 식별자 순서가 곧 조회 순서입니다.
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    table: RwLock<VehicleTable>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, VehicleTable>> {
        self.table
            .read()
            .map_err(|_| AppError::InternalError("vehicle table lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, VehicleTable>> {
        self.table
            .write()
            .map_err(|_| AppError::InternalError("vehicle table lock poisoned".to_string()))
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn find_page(&self, page: u64, size: u64) -> AppResult<Vec<Vehicle>> {
        let skip = page.saturating_mul(size) as usize;

        Ok(self
            .read()?
            .rows
            .values()
            .skip(skip)
            .take(size as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.read()?.rows.len() as u64)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn save(&self, mut vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut table = self.write()?;

        let id = match vehicle.id {
            Some(id) => {
                table.sequence = table.sequence.max(id);
                id
            }
            None => {
                // 쓰기 가드를 쥔 동안에는 패닉하지 않는다
                table.sequence = table.sequence.checked_add(1).ok_or_else(|| {
                    AppError::InternalError("vehicle id sequence exhausted".to_string())
                })?;
                table.sequence
            }
        };

        vehicle.id = Some(id);
        table.rows.insert(id, vehicle.clone());

        Ok(vehicle)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }
}
