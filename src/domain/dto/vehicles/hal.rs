//! HAL(Hypertext Application Language) 표현
//!
//! `/vehicles` 리포지토리 REST 엔드포인트가 반환하는 `_embedded` / `_links`
//! 봉투 구조입니다. 식별자는 본문이 아니라 `self` 링크로만 노출합니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::Vehicle;

/// 하이퍼링크
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// 단일 차량 리소스의 링크
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub vehicle: Link,
}

/// 단일 차량 리소스
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleModel {
    pub name: String,
    #[serde(rename = "_links")]
    pub links: VehicleLinks,
}

impl VehicleModel {
    /// `base_url`은 스킴과 호스트를 포함한 `/vehicles` 컬렉션 주소입니다.
    pub fn from_vehicle(vehicle: &Vehicle, base_url: &str) -> Self {
        let href = match vehicle.id {
            Some(id) => format!("{}/{}", base_url, id),
            None => base_url.to_string(),
        };

        Self {
            name: vehicle.name.clone(),
            links: VehicleLinks {
                self_link: Link::new(href.clone()),
                vehicle: Link::new(href),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmbeddedVehicles {
    pub vehicles: Vec<VehicleModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// 페이지 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

impl PageMetadata {
    pub fn new(size: u64, total_elements: u64, number: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            size,
            total_elements,
            total_pages,
            number,
        }
    }
}

/// 차량 컬렉션 리소스
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleCollectionModel {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedVehicles,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
    pub page: PageMetadata,
}

impl VehicleCollectionModel {
    pub fn new(vehicles: &[Vehicle], base_url: &str, page: PageMetadata) -> Self {
        Self {
            embedded: EmbeddedVehicles {
                vehicles: vehicles
                    .iter()
                    .map(|v| VehicleModel::from_vehicle(v, base_url))
                    .collect(),
            },
            links: CollectionLinks {
                self_link: Link::new(base_url),
            },
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata_rounds_up() {
        assert_eq!(PageMetadata::new(20, 0, 0).total_pages, 0);
        assert_eq!(PageMetadata::new(20, 20, 0).total_pages, 1);
        assert_eq!(PageMetadata::new(20, 21, 1).total_pages, 2);
        assert_eq!(PageMetadata::new(0, 5, 0).total_pages, 0);
    }

    #[test]
    fn test_vehicle_model_json() {
        let model = VehicleModel::from_vehicle(&Vehicle::new(1, "moto"), "http://localhost:8080/vehicles");
        let json = serde_json::to_value(model).unwrap();

        assert_eq!(json["name"], "moto");
        assert_eq!(json["_links"]["self"]["href"], "http://localhost:8080/vehicles/1");
        assert_eq!(json["_links"]["vehicle"]["href"], "http://localhost:8080/vehicles/1");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_collection_json() {
        let vehicles = vec![Vehicle::new(1, "moto"), Vehicle::new(2, "car")];
        let page = PageMetadata::new(20, 2, 0);
        let json = serde_json::to_value(VehicleCollectionModel::new(&vehicles, "http://h/vehicles", page)).unwrap();

        assert_eq!(json["_embedded"]["vehicles"].as_array().unwrap().len(), 2);
        assert_eq!(json["_links"]["self"]["href"], "http://h/vehicles");
        assert_eq!(json["page"]["totalElements"], 2);
        assert_eq!(json["page"]["totalPages"], 1);
    }
}
