use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto};
use crate::features::products::models::Product;

// Walks the adjacency rows upward from the target category; the edge at depth 1
// names the root as its ancestor. A category with no incoming edge is its own
// root.
const SQL_RESOLVE_CATEGORY_AND_ROOT: &str = "WITH RECURSIVE find_root AS ( \
         SELECT cr.ancestor_id, cr.descendant_id, cr.depth \
         FROM category_relationships cr \
         WHERE cr.descendant_id = (SELECT id FROM categories WHERE uuid = $1) \
         UNION ALL \
         SELECT cr.ancestor_id, cr.descendant_id, cr.depth \
         FROM category_relationships cr \
         INNER JOIN find_root fr ON cr.descendant_id = fr.ancestor_id \
     ) \
     SELECT c.id AS category_id, \
            COALESCE((SELECT ancestor_id FROM find_root WHERE depth = 1 LIMIT 1), c.id) AS root_category_id \
     FROM categories c WHERE c.uuid = $1";

const SQL_INSERT_PRODUCT: &str = "INSERT INTO products (name, price_cents, category_id, \
     root_category_id) VALUES ($1, $2, $3, $4) RETURNING id";

const SQL_SELECT_PRODUCT_BY_ID: &str = "SELECT id, uuid, name, price_cents, category_id, \
     root_category_id, created_at, updated_at FROM products WHERE id = $1";

/// Service for product operations
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a product under a category, caching the category's depth-0 root
    /// alongside it, and re-reads the committed row.
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let resolved: Option<(i64, i64)> = sqlx::query_as(SQL_RESOLVE_CATEGORY_AND_ROOT)
            .bind(dto.category_uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to resolve category and root: {:?}", e);
                AppError::Database(e)
            })?;

        let (category_id, root_category_id) = resolved.ok_or_else(|| {
            AppError::NotFound(format!("category {} not found", dto.category_uuid))
        })?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let inserted: std::result::Result<i64, sqlx::Error> = sqlx::query_scalar(SQL_INSERT_PRODUCT)
            .bind(&dto.name)
            .bind(dto.price_cents)
            .bind(category_id)
            .bind(root_category_id)
            .fetch_one(&mut *tx)
            .await;

        let id = match inserted {
            Ok(id) => id,
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    tracing::warn!("unable to rollback transaction: {:?}", rb);
                }
                tracing::error!("Failed to insert product: {:?}", e);
                return Err(AppError::Database(e));
            }
        };

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit product creation: {:?}", e);
            AppError::Database(e)
        })?;

        let product = self.find_by_id(id).await?;

        tracing::info!("Product created: uuid={}, name={}", product.uuid, product.name);

        Ok(ProductResponseDto::from_product(product, dto.category_uuid))
    }

    async fn find_by_id(&self, id: i64) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(SQL_SELECT_PRODUCT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read product {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        product.ok_or_else(|| AppError::NotFound(format!("product {} not found", id)))
    }
}
