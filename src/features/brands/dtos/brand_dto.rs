use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::brands::models::{Brand, BrandStatus};
use crate::shared::validation::STATUS_REGEX;

/// Query params for listing brands
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBrandsQuery {
    /// Brand status to filter by; defaults to "active"
    #[validate(regex(path = *STATUS_REGEX, message = "Status must be 'active', 'inactive' or 'deleted'"))]
    pub status: Option<String>,
}

/// Response DTO for a brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponseDto {
    pub brand_uuid: Uuid,
    pub name: String,
    pub status: BrandStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            brand_uuid: b.uuid,
            name: b.name,
            status: b.status,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
