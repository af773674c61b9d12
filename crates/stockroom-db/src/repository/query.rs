//! # Query Repository
//!
//! Read-side operations: free-text search, paginated listing, low-stock
//! derivation, and the full-catalog export projection.
//!
//! ## Pagination
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                list_paged("bol", page 2, size 10)                   │
//! │                                                                     │
//! │  COUNT matching rows ──► total_items = 25                           │
//! │       │                  total_pages = ceil(25 / 10) = 3            │
//! │       ▼                                                             │
//! │  page in 1..=3 ?                                                    │
//! │   ├── yes: SELECT ... LIMIT 10 OFFSET 10                            │
//! │   └── no:  items = [] (totals still populated so the caller         │
//! │            can clamp and retry)                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All reads are non-transactional and reflect the latest committed state;
//! WAL mode guarantees they never observe a half-committed writer.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use stockroom_core::validation::{validate_page_size, validate_search_query};
use stockroom_core::{page_count, Page, Product};

/// Repository for read-side queries over the catalog.
#[derive(Debug, Clone)]
pub struct QueryRepository {
    pool: SqlitePool,
}

impl QueryRepository {
    /// Creates a new QueryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        QueryRepository { pool }
    }

    /// Searches products by case-insensitive substring.
    ///
    /// One filter contract for the whole crate: the substring is matched
    /// against name, category and location. Empty or whitespace-only text
    /// falls back to the full catalog.
    ///
    /// Ordered by name. SQLite's LIKE is case-insensitive for ASCII, which
    /// is the contract here.
    pub async fn search(&self, text: &str) -> StoreResult<Vec<Product>> {
        let text = validate_search_query(text)?;

        debug!(query = %text, "Searching products");

        if text.is_empty() {
            let products = sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, quantity, min_quantity, category, location
                FROM products
                ORDER BY name
                "#,
            )
            .fetch_all(&self.pool)
            .await?;
            return Ok(products);
        }

        let like = format!("%{}%", text);

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, min_quantity, category, location
            FROM products
            WHERE name LIKE ?1 OR category LIKE ?1 OR location LIKE ?1
            ORDER BY name
            "#,
        )
        .bind(&like)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Returns one page of products matching the filter, plus totals.
    ///
    /// ## Arguments
    /// * `search` - Substring filter (same contract as [`search`](Self::search));
    ///   empty means no filter
    /// * `page` - 1-indexed page number
    /// * `page_size` - Rows per page; must be positive
    ///
    /// ## Out-of-range Pages
    /// `page < 1` or `page > total_pages` returns an empty item slice with
    /// `total_items` and `total_pages` still populated, so the caller can
    /// clamp without a second round trip.
    pub async fn list_paged(
        &self,
        search: &str,
        page: i64,
        page_size: i64,
    ) -> StoreResult<Page<Product>> {
        validate_page_size(page_size)?;
        let search = validate_search_query(search)?;

        debug!(query = %search, page = page, page_size = page_size, "Paged listing");

        let like = format!("%{}%", search);

        // ?1 carries the raw (trimmed) search so the empty string disables
        // the filter without a second query shape
        let total_items: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE ?1 = '' OR name LIKE ?2 OR category LIKE ?2 OR location LIKE ?2
            "#,
        )
        .bind(&search)
        .bind(&like)
        .fetch_one(&self.pool)
        .await?;

        let total_pages = page_count(total_items, page_size);

        if page < 1 || page > total_pages {
            return Ok(Page {
                items: Vec::new(),
                page,
                total_items,
                total_pages,
            });
        }

        let offset = (page - 1) * page_size;

        let items = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, min_quantity, category, location
            FROM products
            WHERE ?1 = '' OR name LIKE ?2 OR category LIKE ?2 OR location LIKE ?2
            ORDER BY name
            LIMIT ?3 OFFSET ?4
            "#,
        )
        .bind(&search)
        .bind(&like)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(Page {
            items,
            page,
            total_items,
            total_pages,
        })
    }

    /// Products strictly below their configured minimum, ordered by name.
    ///
    /// Recomputed on demand; never cached or incrementally maintained.
    pub async fn low_stock(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, min_quantity, category, location
            FROM products
            WHERE quantity < min_quantity
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Full catalog projection for bulk external consumption (CSV export
    /// lives outside the store; this is the row source).
    pub async fn export_snapshot(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, min_quantity, category, location
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use stockroom_core::NewProduct;

    async fn seeded_store() -> Store {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.products();

        let rows = [
            ("Bolt M6", 3, 5, Some("Fasteners"), Some("A-01")),
            ("Bolt M8", 20, 5, Some("Fasteners"), Some("A-02")),
            ("Washer", 5, 5, Some("Fasteners"), None),
            ("Paint Can", 1, 4, Some("Finishing"), Some("C-07")),
        ];
        for (name, qty, min, cat, loc) in rows {
            repo.create(&NewProduct {
                name: name.to_string(),
                quantity: qty,
                min_quantity: min,
                category: cat.map(str::to_string),
                location: loc.map(str::to_string),
            })
            .await
            .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = seeded_store().await;
        let queries = store.queries();

        let hits = queries.search("bolt").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Bolt M6");

        // Category and location participate in the filter
        assert_eq!(queries.search("finish").await.unwrap().len(), 1);
        assert_eq!(queries.search("a-0").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_empty_returns_full_catalog() {
        let store = seeded_store().await;
        let all = store.queries().search("  ").await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn test_list_paged_slices_and_counts() {
        let store = seeded_store().await;
        let queries = store.queries();

        let page1 = queries.list_paged("", 1, 3).await.unwrap();
        assert_eq!(page1.items.len(), 3);
        assert_eq!(page1.total_items, 4);
        assert_eq!(page1.total_pages, 2);

        let page2 = queries.list_paged("", 2, 3).await.unwrap();
        assert_eq!(page2.items.len(), 1);

        // Ordering is by name across the whole result set
        assert_eq!(page1.items[0].name, "Bolt M6");
        assert_eq!(page2.items[0].name, "Washer");
    }

    #[tokio::test]
    async fn test_list_paged_out_of_range_keeps_totals() {
        let store = seeded_store().await;
        let queries = store.queries();

        for bad_page in [0, -1, 3, 99] {
            let page = queries.list_paged("", bad_page, 3).await.unwrap();
            assert!(page.items.is_empty());
            assert_eq!(page.total_items, 4);
            assert_eq!(page.total_pages, 2);
        }
    }

    #[tokio::test]
    async fn test_list_paged_rejects_zero_page_size() {
        let store = seeded_store().await;
        assert!(store.queries().list_paged("", 1, 0).await.is_err());
    }

    #[tokio::test]
    async fn test_low_stock_threshold_is_strict() {
        let store = seeded_store().await;
        let low = store.queries().low_stock().await.unwrap();

        // Bolt M6 (3 < 5) and Paint Can (1 < 4); Washer is exactly at its
        // minimum and stays out
        let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bolt M6", "Paint Can"]);
    }

    #[tokio::test]
    async fn test_export_snapshot_is_full_ordered_catalog() {
        let store = seeded_store().await;
        let rows = store.queries().export_snapshot().await.unwrap();

        assert_eq!(rows.len(), 4);
        let mut names: Vec<String> = rows.iter().map(|p| p.name.clone()).collect();
        let sorted = {
            let mut s = names.clone();
            s.sort();
            s
        };
        assert_eq!(names, sorted);
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
