//! Vehicle Entity Implementation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 차량 엔티티
///
/// 식별자는 저장소가 최초 저장 시점에 자동으로 부여하는 대리 키입니다.
/// 아직 저장되지 않은 차량은 `id`가 `None` 입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    /// 자동 생성 식별자
    pub id: Option<i64>,
    /// 차량 이름
    pub name: String,
}

impl Vehicle {
    /// 식별자와 이름을 모두 지정하여 생성합니다.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// 아직 저장되지 않은 차량을 생성합니다.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn builder() -> VehicleBuilder {
        VehicleBuilder::default()
    }
}

/// [`Vehicle`] 빌더
#[derive(Debug, Default)]
pub struct VehicleBuilder {
    id: Option<i64>,
    name: Option<String>,
}

impl VehicleBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            id: self.id,
            name: self.name.unwrap_or_default(),
        }
    }
}
