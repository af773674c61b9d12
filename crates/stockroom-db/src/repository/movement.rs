//! # Movement Ledger Repository
//!
//! The append-only ledger of stock movements, and the **only** writer of
//! product quantity deltas.
//!
//! ## Ledger Append
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     add() - one transaction                         │
//! │                                                                     │
//! │  validate quantity > 0          ← before any statement              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BEGIN                                                              │
//! │    product exists?              ← ReferentialIntegrity if not       │
//! │    INSERT movement (date = now)                                     │
//! │    UPDATE products                                                  │
//! │      SET quantity = quantity + delta                                │
//! │  COMMIT                                                             │
//! │                                                                     │
//! │  Either both rows change or neither does. A reader never sees a     │
//! │  ledger row without its matching quantity delta.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Delta Pattern
//! The quantity update is relative (`quantity + delta`), never an absolute
//! write, so the conservation invariant holds: a product's quantity is the
//! net of its movement history.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockroom_core::validation::validate_movement_quantity;
use stockroom_core::{Movement, MovementRecord, NewMovement, ValidationError};

/// Repository for the movement ledger.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    /// Creates a new MovementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MovementRepository { pool }
    }

    /// Appends a movement and applies its delta to the product, atomically.
    ///
    /// ## Steps
    /// 1. Validate the magnitude is a positive integer (no side effects on
    ///    failure)
    /// 2. In one transaction: verify the product exists, stamp the current
    ///    timestamp, insert the ledger row, add the signed delta to the
    ///    product quantity
    /// 3. Commit; any failure rolls back both statements
    ///
    /// The date is stamped here, not caller-supplied, so ledger ordering
    /// reflects insertion order.
    ///
    /// The delta addition is checked in Rust before the update runs:
    /// SQLite widens an overflowing INTEGER sum to REAL instead of failing
    /// the statement, which would leave the column undecodable as i64.
    ///
    /// ## Returns
    /// The inserted [`Movement`] with its assigned id and timestamp.
    ///
    /// ## Errors
    /// * `StoreError::Validation` - zero or negative magnitude, or a delta
    ///   that would push the quantity outside the i64 range
    /// * `StoreError::ReferentialIntegrity` - product_id does not exist
    pub async fn add(&self, movement: &NewMovement) -> StoreResult<Movement> {
        validate_movement_quantity(movement.quantity)?;

        debug!(
            product_id = movement.product_id,
            kind = %movement.kind,
            quantity = movement.quantity,
            "Appending movement"
        );

        let mut tx = self.pool.begin().await?;

        // Reading the quantity doubles as the existence check and gives a
        // precise error instead of a bare FOREIGN KEY failure from the insert
        let current: Option<i64> =
            sqlx::query_scalar("SELECT quantity FROM products WHERE id = ?1")
                .bind(movement.product_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(current) = current else {
            return Err(StoreError::referential(format!(
                "movement references missing product {}",
                movement.product_id
            )));
        };

        let date = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO movements (product_id, kind, quantity, date, note)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(movement.product_id)
        .bind(movement.kind)
        .bind(movement.quantity)
        .bind(date)
        .bind(&movement.note)
        .execute(&mut *tx)
        .await?;

        let delta = movement.kind.delta(movement.quantity);

        // The read above happened inside this transaction, so the sum can't
        // be invalidated by a concurrent writer before the update commits
        if current.checked_add(delta).is_none() {
            // Dropping the transaction rolls back the ledger insert
            return Err(StoreError::Validation(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: i64::MIN,
                max: i64::MAX,
            }));
        }

        sqlx::query("UPDATE products SET quantity = quantity + ?1 WHERE id = ?2")
            .bind(delta)
            .bind(movement.product_id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        Ok(Movement {
            id: result.last_insert_rowid(),
            product_id: movement.product_id,
            kind: movement.kind,
            quantity: movement.quantity,
            date,
            note: movement.note.clone(),
        })
    }

    /// Lists the whole ledger, most recent first, with product names.
    ///
    /// The join is a LEFT JOIN; cascade delete guarantees a ledger row
    /// never outlives its product, so `product_name` is present in
    /// practice. Same-timestamp rows fall back to id order so the listing
    /// still reflects insertion order.
    pub async fn list(&self) -> StoreResult<Vec<MovementRecord>> {
        let records = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT
                mv.id,
                mv.product_id,
                mv.kind,
                mv.quantity,
                mv.date,
                mv.note,
                p.name AS product_name
            FROM movements mv
            LEFT JOIN products p ON p.id = mv.product_id
            ORDER BY mv.date DESC, mv.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Lists the ledger rows for one product, oldest first.
    ///
    /// Used to audit a product's history against its current quantity.
    pub async fn list_for_product(&self, product_id: i64) -> StoreResult<Vec<Movement>> {
        let movements = sqlx::query_as::<_, Movement>(
            r#"
            SELECT id, product_id, kind, quantity, date, note
            FROM movements
            WHERE product_id = ?1
            ORDER BY date, id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(movements)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use stockroom_core::{MovementKind, NewProduct};

    async fn store_with_product() -> (Store, i64) {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let id = store
            .products()
            .create(&NewProduct {
                name: "Bolt".to_string(),
                quantity: 0,
                min_quantity: 10,
                category: None,
                location: None,
            })
            .await
            .unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn test_add_applies_signed_delta() {
        let (store, id) = store_with_product().await;
        let ledger = store.movements();

        ledger
            .add(&NewMovement {
                product_id: id,
                kind: MovementKind::Inbound,
                quantity: 50,
                note: None,
            })
            .await
            .unwrap();

        let p = store.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(p.quantity, 50);

        ledger
            .add(&NewMovement {
                product_id: id,
                kind: MovementKind::Outbound,
                quantity: 70,
                note: Some("rush order".to_string()),
            })
            .await
            .unwrap();

        let p = store.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(p.quantity, -20);
    }

    #[tokio::test]
    async fn test_add_rejects_non_positive_magnitude() {
        let (store, id) = store_with_product().await;
        let ledger = store.movements();

        for qty in [0, -5] {
            let result = ledger
                .add(&NewMovement {
                    product_id: id,
                    kind: MovementKind::Inbound,
                    quantity: qty,
                    note: None,
                })
                .await;
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }

        // Nothing reached the ledger or the product
        assert!(ledger.list().await.unwrap().is_empty());
        let p = store.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(p.quantity, 0);
    }

    #[tokio::test]
    async fn test_add_for_missing_product_is_referential_error() {
        let (store, _) = store_with_product().await;
        let ledger = store.movements();

        let result = ledger
            .add(&NewMovement {
                product_id: 4242,
                kind: MovementKind::Inbound,
                quantity: 1,
                note: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(StoreError::ReferentialIntegrity { .. })
        ));
        assert!(ledger.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_delta_that_overflows_quantity() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let id = store
            .products()
            .create(&NewProduct {
                name: "Saturated".to_string(),
                quantity: i64::MAX,
                min_quantity: 0,
                category: None,
                location: None,
            })
            .await
            .unwrap();
        let ledger = store.movements();

        let result = ledger
            .add(&NewMovement {
                product_id: id,
                kind: MovementKind::Inbound,
                quantity: 1,
                note: None,
            })
            .await;

        assert!(matches!(result, Err(StoreError::Validation(_))));

        // The row must still decode as an integer, at its old value
        let p = store.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(p.quantity, i64::MAX);
        assert!(ledger.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_newest_first_with_product_name() {
        let (store, id) = store_with_product().await;
        let ledger = store.movements();

        for qty in [5, 7, 9] {
            ledger
                .add(&NewMovement {
                    product_id: id,
                    kind: MovementKind::Inbound,
                    quantity: qty,
                    note: None,
                })
                .await
                .unwrap();
        }

        let records = ledger.list().await.unwrap();
        assert_eq!(records.len(), 3);
        // Newest first: last insert leads
        assert_eq!(records[0].quantity, 9);
        assert_eq!(records[2].quantity, 5);
        for r in &records {
            assert_eq!(r.product_name.as_deref(), Some("Bolt"));
        }
    }
}
