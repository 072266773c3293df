//! 차량 생성/수정 요청 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 차량 생성 및 수정 요청 본문
///
/// ```json
/// { "name": "moto" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VehicleForm {
    /// 차량 이름 (1-255자)
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
}
