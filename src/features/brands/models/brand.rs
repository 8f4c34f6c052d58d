use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Brand status enum matching the database check constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    Active,
    Inactive,
    Deleted,
}

impl std::fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandStatus::Active => write!(f, "active"),
            BrandStatus::Inactive => write!(f, "inactive"),
            BrandStatus::Deleted => write!(f, "deleted"),
        }
    }
}

/// Database model for a brand row
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Brand {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub status: BrandStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
