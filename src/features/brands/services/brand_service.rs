use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::brands::dtos::BrandResponseDto;
use crate::features::brands::models::Brand;

const SQL_SELECT_BRANDS_BY_STATUS: &str = "SELECT id, uuid, name, status, created_at, \
     updated_at FROM brands WHERE status = $1 ORDER BY id";

/// Service for brand operations
pub struct BrandService {
    pool: PgPool,
}

impl BrandService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists brands with the given status, plus the total returned
    pub async fn list(&self, status: &str) -> Result<(Vec<BrandResponseDto>, i64)> {
        let brands = sqlx::query_as::<_, Brand>(SQL_SELECT_BRANDS_BY_STATUS)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list brands: {:?}", e);
                AppError::Database(e)
            })?;

        if brands.is_empty() {
            return Err(AppError::NotFound("brands not found".to_string()));
        }

        let total = brands.len() as i64;

        Ok((brands.into_iter().map(|b| b.into()).collect(), total))
    }
}
