//! Keyset pagination over entities with a monotonic integer key.
//!
//! Listing endpoints page with an exclusive lower bound (`key > from_id`) instead
//! of OFFSET, so a page is addressed by the previous page's `end_cursor` and stays
//! stable under concurrent inserts before the cursor. Filters are equality-only
//! and are rendered in the order they were added, so the generated SQL for a given
//! filter set is always the same text.
//!
//! The engine issues at most two queries per call: the data query, and a COUNT
//! over the identical predicate when a full page came back. It never mutates
//! state and holds no cache; a call is idempotent as long as no writer touches
//! matching rows in between.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::shared::constants::DEFAULT_PAGE_SIZE;

/// Page metadata derived from a data query, computed per response and never stored.
///
/// `total_count` is the COUNT over the page's predicate when a full page was
/// returned. On the last (short) page it is only the number of rows on that page,
/// not the filter's true total; the name is kept for wire compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextPageInfo {
    pub has_next_page: bool,
    pub start_cursor: i64,
    pub end_cursor: i64,
    pub total_count: i64,
}

impl NextPageInfo {
    /// Page info for a short page: fewer rows than requested means nothing
    /// follows, and `total_count` reports only the rows on this page.
    fn last_page(start_cursor: i64, end_cursor: i64, rows_returned: i64) -> Self {
        Self {
            has_next_page: false,
            start_cursor,
            end_cursor,
            total_count: rows_returned,
        }
    }

    /// Page info for a full page: the COUNT over the same predicate decides
    /// whether anything follows.
    fn full_page(start_cursor: i64, end_cursor: i64, page_size: i64, total_count: i64) -> Self {
        Self {
            has_next_page: total_count > page_size,
            start_cursor,
            end_cursor,
            total_count,
        }
    }
}

/// Builder for a keyset-paginated SELECT and its companion COUNT.
///
/// Accumulates `(column, value)` equality pairs in insertion order; placeholder
/// numbering is `$1` for the key bound, `$2..` for the filters, and the last
/// placeholder of the data query for the LIMIT.
#[derive(Debug, Clone)]
pub struct KeysetQuery {
    table: &'static str,
    columns: &'static str,
    key_column: &'static str,
    from_id: i64,
    page_size: i64,
    filters: Vec<(&'static str, String)>,
}

impl KeysetQuery {
    pub fn new(table: &'static str, columns: &'static str, key_column: &'static str) -> Self {
        Self {
            table,
            columns,
            key_column,
            from_id: 0,
            page_size: DEFAULT_PAGE_SIZE,
            filters: Vec::new(),
        }
    }

    /// Exclusive lower bound on the key; results have `key > from_id`.
    pub fn from_id(mut self, from_id: i64) -> Self {
        self.from_id = from_id;
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Adds `AND column = value` when the value is non-empty; an empty or absent
    /// value means no constraint on that column.
    pub fn filter(mut self, column: &'static str, value: Option<String>) -> Self {
        if let Some(v) = value {
            if !v.is_empty() {
                self.filters.push((column, v));
            }
        }
        self
    }

    /// Renders the data query. Clause order follows filter insertion order.
    fn build_select(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {} > $1",
            self.columns, self.table, self.key_column
        );
        for (i, (column, _)) in self.filters.iter().enumerate() {
            sql.push_str(&format!(" AND {} = ${}", column, i + 2));
        }
        sql.push_str(&format!(
            " ORDER BY {} ASC LIMIT ${}",
            self.key_column,
            self.filters.len() + 2
        ));
        sql
    }

    /// Renders the COUNT query over the identical predicate, key bound included.
    fn build_count(&self) -> String {
        let mut sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} > $1",
            self.table, self.key_column
        );
        for (i, (column, _)) in self.filters.iter().enumerate() {
            sql.push_str(&format!(" AND {} = ${}", column, i + 2));
        }
        sql
    }

    /// Executes the plan: filtered scan, then a conditional COUNT.
    ///
    /// A zero-row page is a not-found error, including an exhausted cursor.
    /// A short page is the last page and reports `total_count` = rows returned.
    /// A full page triggers the COUNT; `has_next_page = total_count > page_size`.
    pub async fn fetch_page<T>(self, pool: &PgPool, key_of: fn(&T) -> i64) -> Result<(Vec<T>, NextPageInfo)>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        if self.page_size <= 0 {
            return Err(AppError::BadRequest(format!(
                "page size must be a positive integer, got {}",
                self.page_size
            )));
        }
        if self.from_id < 0 {
            return Err(AppError::BadRequest(format!(
                "fromId must be non-negative, got {}",
                self.from_id
            )));
        }

        let select_sql = self.build_select();
        let mut query = sqlx::query_as::<_, T>(&select_sql).bind(self.from_id);
        for (_, value) in &self.filters {
            query = query.bind(value.clone());
        }
        query = query.bind(self.page_size);

        let rows = query.fetch_all(pool).await.map_err(|e| {
            tracing::error!("Failed to fetch page: {:?}", e);
            AppError::Database(e)
        })?;

        if rows.is_empty() {
            return Err(AppError::NotFound("no rows found for this page".to_string()));
        }

        let start_cursor = key_of(&rows[0]);
        let end_cursor = key_of(&rows[rows.len() - 1]);

        if (rows.len() as i64) < self.page_size {
            let rows_returned = rows.len() as i64;
            return Ok((
                rows,
                NextPageInfo::last_page(start_cursor, end_cursor, rows_returned),
            ));
        }

        let count_sql = self.build_count();
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(self.from_id);
        for (_, value) in &self.filters {
            count_query = count_query.bind(value.clone());
        }

        let total_count = count_query.fetch_one(pool).await.map_err(|e| {
            tracing::error!("Failed to count rows for pagination: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((
            rows,
            NextPageInfo::full_page(start_cursor, end_cursor, self.page_size, total_count),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_query() -> KeysetQuery {
        KeysetQuery::new("users", "id, uuid, email, status", "id")
    }

    #[test]
    fn test_select_without_filters() {
        let sql = users_query().build_select();
        assert_eq!(
            sql,
            "SELECT id, uuid, email, status FROM users WHERE id > $1 ORDER BY id ASC LIMIT $2"
        );
    }

    #[test]
    fn test_select_with_filters_preserves_insertion_order() {
        let sql = users_query()
            .filter("status", Some("active".to_string()))
            .filter("sign_up_option", Some("general".to_string()))
            .filter("timezone", Some("utc".to_string()))
            .build_select();
        assert_eq!(
            sql,
            "SELECT id, uuid, email, status FROM users WHERE id > $1 \
             AND status = $2 AND sign_up_option = $3 AND timezone = $4 \
             ORDER BY id ASC LIMIT $5"
        );
    }

    #[test]
    fn test_empty_filter_value_is_skipped() {
        let with_gap = users_query()
            .filter("status", Some("active".to_string()))
            .filter("sign_up_option", Some(String::new()))
            .filter("timezone", None)
            .build_select();
        let without = users_query()
            .filter("status", Some("active".to_string()))
            .build_select();
        assert_eq!(with_gap, without);
    }

    #[test]
    fn test_count_shares_predicate_including_key_bound() {
        let query = users_query()
            .from_id(42)
            .filter("status", Some("active".to_string()));
        assert_eq!(
            query.build_count(),
            "SELECT COUNT(*) FROM users WHERE id > $1 AND status = $2"
        );
    }

    #[test]
    fn test_same_filter_set_renders_same_sql() {
        let a = users_query()
            .filter("status", Some("active".to_string()))
            .filter("timezone", Some("utc".to_string()))
            .build_select();
        let b = users_query()
            .filter("status", Some("active".to_string()))
            .filter("timezone", Some("utc".to_string()))
            .build_select();
        assert_eq!(a, b);
    }

    #[test]
    fn test_last_page_total_count_is_rows_on_page() {
        // 3 rows came back for a page size of 5: last page, and total_count
        // deliberately reports 3 even if earlier pages saw more rows.
        let info = NextPageInfo::last_page(21, 23, 3);
        assert!(!info.has_next_page);
        assert_eq!(info.start_cursor, 21);
        assert_eq!(info.end_cursor, 23);
        assert_eq!(info.total_count, 3);
    }

    #[test]
    fn test_full_page_with_more_rows_has_next() {
        // 5 active rows, page size 2: full page, COUNT says 5
        let info = NextPageInfo::full_page(1, 2, 2, 5);
        assert!(info.has_next_page);
        assert_eq!(info.total_count, 5);
    }

    #[test]
    fn test_full_page_with_exact_fit_has_no_next() {
        let info = NextPageInfo::full_page(1, 2, 2, 2);
        assert!(!info.has_next_page);
    }
}
