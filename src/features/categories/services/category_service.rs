use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryNodeDto, CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::{Category, HierarchyRow};

const SQL_SELECT_CATEGORY_BY_ID: &str = "SELECT id, uuid, name, description, status, \
     created_at, updated_at FROM categories WHERE id = $1";

const SQL_SELECT_CONFLICTING_NAME: &str =
    "SELECT name FROM categories WHERE LOWER(name) = LOWER($1)";

const SQL_INSERT_CATEGORY: &str =
    "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id";

const SQL_RESOLVE_PARENT_AND_CHECK_NAME: &str = "SELECT id, \
     EXISTS(SELECT 1 FROM categories WHERE LOWER(name) = LOWER($2)) AS name_taken \
     FROM categories WHERE uuid = $1";

// The parent's cached depth is the depth of the edge where the parent is the
// descendant; a parent with no such edge is a root and its children sit at depth 1.
const SQL_INSERT_RELATIONSHIP: &str = "WITH parent_depth AS ( \
         SELECT depth FROM category_relationships WHERE descendant_id = $1 LIMIT 1 \
     ) \
     INSERT INTO category_relationships (ancestor_id, descendant_id, depth) \
     VALUES ($1, $2, COALESCE((SELECT depth FROM parent_depth), 0) + 1)";

// Walks outward from the root set (categories with no incoming edge) through the
// adjacency rows. Roots report depth 1; ordering by (depth, id) fixes sibling
// order to insertion order.
const SQL_SELECT_HIERARCHY: &str = "WITH RECURSIVE category_tree AS ( \
         SELECT c.id, c.uuid, CAST(NULL AS uuid) AS parent_uuid, c.name, 1 AS depth \
         FROM categories c \
         WHERE c.id NOT IN (SELECT descendant_id FROM category_relationships) \
         UNION ALL \
         SELECT c.id, c.uuid, ct.uuid AS parent_uuid, c.name, ct.depth + 1 \
         FROM categories c \
         INNER JOIN category_relationships cr ON c.id = cr.descendant_id \
         INNER JOIN category_tree ct ON cr.ancestor_id = ct.id \
     ) \
     SELECT uuid AS category_uuid, parent_uuid AS parent_category_uuid, depth, name \
     FROM category_tree ORDER BY depth, id";

/// Service for category operations.
///
/// Category and relationship writes always happen inside one transaction;
/// adjacency edges are created exactly once at subcategory creation and are
/// never updated or deleted on their own.
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a category: a root without a parent uuid, a subcategory with one
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = match dto.parent_category_uuid {
            Some(parent_uuid) => self.create_subcategory(&dto, parent_uuid).await?,
            None => self.create_root(&dto).await?,
        };

        Ok(category.into())
    }

    /// Full category forest, assembled from one recursive read
    pub async fn get_hierarchy(&self) -> Result<Vec<CategoryNodeDto>> {
        let rows = sqlx::query_as::<_, HierarchyRow>(SQL_SELECT_HIERARCHY)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read category hierarchy: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(CategoryNodeDto::build_forest(&rows))
    }

    /// Creates a root category inside one serializable transaction and re-reads
    /// the committed row so the response carries the storage-assigned uuid,
    /// status and timestamps.
    async fn create_root(&self, dto: &CreateCategoryDto) -> Result<Category> {
        let mut tx = self.begin_serializable().await?;

        let id = match Self::insert_root(&mut tx, dto).await {
            Ok(id) => id,
            Err(e) => {
                Self::rollback(tx).await;
                return Err(e);
            }
        };

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit category creation: {:?}", e);
            AppError::Database(e)
        })?;

        self.find_by_id(id).await
    }

    /// Creates a subcategory and its adjacency edge inside one serializable
    /// transaction. The parent is resolved and the name-uniqueness check runs in
    /// the same round-trip; a missing parent wins over a name collision.
    async fn create_subcategory(
        &self,
        dto: &CreateCategoryDto,
        parent_uuid: Uuid,
    ) -> Result<Category> {
        let mut tx = self.begin_serializable().await?;

        let id = match Self::insert_subcategory(&mut tx, dto, parent_uuid).await {
            Ok(id) => id,
            Err(e) => {
                Self::rollback(tx).await;
                return Err(e);
            }
        };

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit subcategory creation: {:?}", e);
            AppError::Database(e)
        })?;

        self.find_by_id(id).await
    }

    async fn insert_root(tx: &mut Transaction<'_, Postgres>, dto: &CreateCategoryDto) -> Result<i64> {
        Self::check_name_exists(tx, &dto.name).await?;

        let id: i64 = sqlx::query_scalar(SQL_INSERT_CATEGORY)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_one(&mut **tx)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(id)
    }

    async fn insert_subcategory(
        tx: &mut Transaction<'_, Postgres>,
        dto: &CreateCategoryDto,
        parent_uuid: Uuid,
    ) -> Result<i64> {
        let resolved: Option<(i64, bool)> = sqlx::query_as(SQL_RESOLVE_PARENT_AND_CHECK_NAME)
            .bind(parent_uuid)
            .bind(&dto.name)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to resolve parent category: {:?}", e);
                AppError::Database(e)
            })?;

        let (parent_id, name_taken) = resolved.ok_or_else(|| {
            AppError::NotFound(format!("parent category {} not found", parent_uuid))
        })?;

        if name_taken {
            tracing::warn!("category name already exists, input: {}", dto.name);
            return Err(AppError::Conflict(format!(
                "category name already exists: {}",
                dto.name
            )));
        }

        let id: i64 = sqlx::query_scalar(SQL_INSERT_CATEGORY)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_one(&mut **tx)
            .await
            .map_err(Self::map_insert_error)?;

        sqlx::query(SQL_INSERT_RELATIONSHIP)
            .bind(parent_id)
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert category relationship: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(id)
    }

    /// Global, case-insensitive name check across every row regardless of status
    async fn check_name_exists(tx: &mut Transaction<'_, Postgres>, name: &str) -> Result<()> {
        let existing: Option<String> = sqlx::query_scalar(SQL_SELECT_CONFLICTING_NAME)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check existing category name: {:?}", e);
                AppError::Database(e)
            })?;

        if let Some(existing) = existing {
            tracing::warn!(
                "category name already exists, input: {} existing: {}",
                name,
                existing
            );
            return Err(AppError::Conflict(format!(
                "category name already exists: {}",
                name
            )));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(SQL_SELECT_CATEGORY_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        category.ok_or_else(|| AppError::NotFound(format!("category {} not found", id)))
    }

    /// Two concurrent creations racing past the pre-check serialize on the
    /// unique index; the loser surfaces as a conflict, not a driver error.
    fn map_insert_error(e: sqlx::Error) -> AppError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::Conflict("category name already exists".to_string());
            }
        }
        tracing::error!("Failed to insert category: {:?}", e);
        AppError::Database(e)
    }

    async fn begin_serializable(&self) -> Result<Transaction<'static, Postgres>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set transaction isolation: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(tx)
    }

    /// A failed rollback is logged but never overrides the original error.
    async fn rollback(tx: Transaction<'_, Postgres>) {
        if let Err(e) = tx.rollback().await {
            tracing::warn!("unable to rollback transaction: {:?}", e);
        }
    }
}
