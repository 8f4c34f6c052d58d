use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a product row.
///
/// `root_category_id` caches the depth-0 ancestor of the product's category so
/// storefront browsing can group by top-level category without walking the
/// hierarchy per product.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Product {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub category_id: i64,
    pub root_category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
