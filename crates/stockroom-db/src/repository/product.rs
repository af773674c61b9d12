//! # Product Repository
//!
//! Catalog CRUD for products.
//!
//! ## Key Operations
//! - Full listing ordered by name (selector population)
//! - Create with validated name and defaulted numeric fields
//! - Full-record update (all mutable fields replaced atomically)
//! - Cascade delete: ledger rows and product removed in one transaction
//!
//! ## What This Repository Never Does
//! It never computes stock deltas. The movement ledger is the only writer
//! of quantity changes; the update here is the externally-forced
//! correction path that replaces the whole record.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockroom_core::validation::validate_product_name;
use stockroom_core::{NewProduct, Product, ProductUpdate};

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// let id = repo.create(&NewProduct { name: "Bolt".into(), ..default }).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product, ordered by name ascending.
    ///
    /// No pagination; intended for small-scope consumers such as populating
    /// a product selector. Use `QueryRepository::list_paged` for tables.
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, min_quantity, category, location
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, min_quantity, category, location
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns its assigned id.
    ///
    /// ## Validation
    /// The name must be non-empty after trimming; a rejected name aborts
    /// before any statement runs.
    pub async fn create(&self, product: &NewProduct) -> StoreResult<i64> {
        validate_product_name(&product.name)?;
        let name = product.name.trim();

        debug!(name = %name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, quantity, min_quantity, category, location)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(name)
        .bind(product.quantity)
        .bind(product.min_quantity)
        .bind(&product.category)
        .bind(&product.location)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces all mutable fields of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(StoreError::NotFound)` - No row matched the id; SQLite would
    ///   silently no-op here, so the zero-rows-affected case is surfaced
    ///   explicitly
    pub async fn update(&self, product: &ProductUpdate) -> StoreResult<()> {
        validate_product_name(&product.name)?;
        let name = product.name.trim();

        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                quantity = ?3,
                min_quantity = ?4,
                category = ?5,
                location = ?6
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(name)
        .bind(product.quantity)
        .bind(product.min_quantity)
        .bind(&product.category)
        .bind(&product.location)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Product", product.id));
        }

        Ok(())
    }

    /// Deletes a product and all its ledger rows in one transaction.
    ///
    /// ## Cascade Order
    /// ```text
    /// BEGIN
    ///   DELETE FROM movements WHERE product_id = ?   ← dependents first
    ///   DELETE FROM products  WHERE id = ?           ← then the parent
    /// COMMIT
    /// ```
    /// Movements go first so the foreign key never sees an orphan, and the
    /// whole unit rolls back if either statement fails.
    ///
    /// ## Returns
    /// * `Err(StoreError::NotFound)` - No product matched; nothing was
    ///   deleted (the transaction is rolled back)
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        debug!(id = id, "Deleting product with cascade");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM movements WHERE product_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the movement delete
            return Err(StoreError::not_found("Product", id));
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    async fn test_store() -> Store {
        Store::open(StoreConfig::in_memory()).await.unwrap()
    }

    fn bolt() -> NewProduct {
        NewProduct {
            name: "Bolt".to_string(),
            quantity: 10,
            min_quantity: 2,
            category: Some("Fasteners".to_string()),
            location: Some("A-01".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = test_store().await;
        let repo = store.products();

        let first = repo.create(&bolt()).await.unwrap();
        let second = repo
            .create(&NewProduct {
                name: "Washer".to_string(),
                ..bolt()
            })
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let store = test_store().await;
        let repo = store.products();

        let result = repo
            .create(&NewProduct {
                name: "   ".to_string(),
                quantity: 0,
                min_quantity: 0,
                category: None,
                location: None,
            })
            .await;

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_name() {
        let store = test_store().await;
        let repo = store.products();

        for name in ["Washer", "Bolt", "Nut"] {
            repo.create(&NewProduct {
                name: name.to_string(),
                ..bolt()
            })
            .await
            .unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Bolt", "Nut", "Washer"]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = test_store().await;
        let repo = store.products();
        let id = repo.create(&bolt()).await.unwrap();

        repo.update(&ProductUpdate {
            id,
            name: "M6 Bolt".to_string(),
            quantity: 99,
            min_quantity: 5,
            category: None,
            location: Some("B-12".to_string()),
        })
        .await
        .unwrap();

        let p = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(p.name, "M6 Bolt");
        assert_eq!(p.quantity, 99);
        assert_eq!(p.min_quantity, 5);
        assert_eq!(p.category, None);
        assert_eq!(p.location.as_deref(), Some("B-12"));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let store = test_store().await;
        let repo = store.products();

        let result = repo
            .update(&ProductUpdate {
                id: 4242,
                name: "Ghost".to_string(),
                quantity: 0,
                min_quantity: 0,
                category: None,
                location: None,
            })
            .await;

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let store = test_store().await;
        let repo = store.products();

        let result = repo.delete(4242).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
