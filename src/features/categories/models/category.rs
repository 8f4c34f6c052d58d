use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Category status enum matching the database check constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Inactive,
    Deleted,
}

impl std::fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryStatus::Active => write!(f, "active"),
            CategoryStatus::Inactive => write!(f, "inactive"),
            CategoryStatus::Deleted => write!(f, "deleted"),
        }
    }
}

/// Database model for a category row
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Category {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
    pub status: CategoryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the recursive hierarchy read.
///
/// Produced only by the read path and never persisted. A null parent uuid marks
/// a root; `depth` starts at 1 for roots and grows by 1 per level.
#[derive(Debug, Clone, FromRow)]
pub struct HierarchyRow {
    pub category_uuid: Uuid,
    pub parent_category_uuid: Option<Uuid>,
    pub depth: i32,
    pub name: String,
}
