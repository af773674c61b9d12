//! # Domain Types
//!
//! Core domain types used throughout the stockroom workspace.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │    Movement     │   │  MovementKind   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (i64)       │   │  id (i64)       │   │  Inbound  (+q)  │   │
//! │  │  name           │   │  product_id(FK) │   │  Outbound (-q)  │   │
//! │  │  quantity       │   │  kind           │   └─────────────────┘   │
//! │  │  min_quantity   │   │  quantity       │                         │
//! │  └─────────────────┘   │  date (ledger)  │                         │
//! │                        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conservation Invariant
//! A product's `quantity` is always the net of the signed deltas of every
//! movement referencing it. Only the movement ledger applies deltas; the
//! product repository never computes them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Movement Kind
// =============================================================================

/// The direction of a stock movement.
///
/// ## Closed Enumeration
/// The ledger accepts exactly two kinds. Unrecognized input fails parsing
/// with a [`ValidationError`] instead of being coerced to `Outbound`, so a
/// typo can never silently drain stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    /// Stock received; applies a positive delta.
    Inbound,
    /// Stock dispatched; applies a negative delta.
    Outbound,
}

impl MovementKind {
    /// Translates a movement magnitude into the signed delta applied to the
    /// product quantity.
    ///
    /// ## Sign Rule
    /// - `Inbound`  → `+quantity`
    /// - `Outbound` → `-abs(quantity)`
    ///
    /// The magnitude is taken via absolute value for outbound movements, so
    /// a caller-supplied sign can never flip the direction.
    #[inline]
    pub fn delta(self, quantity: i64) -> i64 {
        match self {
            MovementKind::Inbound => quantity,
            MovementKind::Outbound => -quantity.abs(),
        }
    }

    /// Returns the canonical wire/storage spelling.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            MovementKind::Inbound => "INBOUND",
            MovementKind::Outbound => "OUTBOUND",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "INBOUND" => Ok(MovementKind::Inbound),
            "OUTBOUND" => Ok(MovementKind::Outbound),
            other => Err(ValidationError::NotAllowed {
                field: "kind".to_string(),
                value: other.to_string(),
                allowed: vec!["INBOUND".to_string(), "OUTBOUND".to_string()],
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry with its current stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the store at creation. Immutable.
    pub id: i64,

    /// Display name. Never empty.
    pub name: String,

    /// Current stock level: the net of all movement deltas. May go negative
    /// when outbound movements exceed stock; low-stock derivation still works.
    pub quantity: i64,

    /// Threshold below which the product counts as low stock (strict `<`).
    pub min_quantity: i64,

    /// Optional grouping label.
    pub category: Option<String>,

    /// Optional physical location (shelf, bin, warehouse).
    pub location: Option<String>,
}

impl Product {
    /// Checks whether this product is below its configured minimum.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.min_quantity
    }
}

/// Fields for creating a new product. The id is assigned by the store.
///
/// Numeric fields default to 0 when absent from the caller's payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub min_quantity: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Full-record replacement of a product's mutable fields.
///
/// Every field is replaced atomically; there is no partial patch. A direct
/// quantity write through this type is the externally-forced correction path
/// and resets the baseline the ledger accumulates onto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub min_quantity: i64,
    pub category: Option<String>,
    pub location: Option<String>,
}

// =============================================================================
// Movement
// =============================================================================

/// An entry in the append-only movement ledger.
///
/// Immutable once inserted. Removed only as a side effect of deleting the
/// parent product (cascade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Movement {
    pub id: i64,
    pub product_id: i64,
    pub kind: MovementKind,
    /// Positive magnitude; the sign comes from `kind`.
    pub quantity: i64,
    /// Stamped by the ledger at insert time, never caller-supplied, so
    /// ledger ordering reflects insertion order.
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

impl Movement {
    /// The signed quantity change this movement applied to its product.
    #[inline]
    pub fn delta(&self) -> i64 {
        self.kind.delta(self.quantity)
    }
}

/// A ledger row joined with its product's name, for display.
///
/// `product_name` is optional because the join is a LEFT JOIN; with cascade
/// delete in place a ledger row never outlives its product, so in practice
/// the name is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MovementRecord {
    pub id: i64,
    pub product_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub product_name: Option<String>,
}

/// Fields for appending a movement. Date is stamped by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovement {
    pub product_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
}

// =============================================================================
// Pagination
// =============================================================================

/// One page of results plus the totals a caller needs to render a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The rows for the requested page. Empty when the page is out of range.
    pub items: Vec<T>,
    /// The 1-indexed page that was requested.
    pub page: i64,
    /// Total matching rows across all pages.
    pub total_items: i64,
    /// `ceil(total_items / page_size)`.
    pub total_pages: i64,
}

/// Computes the page count for a result set.
///
/// `page_size` must already be validated as positive.
#[inline]
pub fn page_count(total_items: i64, page_size: i64) -> i64 {
    debug_assert!(page_size > 0);
    (total_items + page_size - 1) / page_size
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sign_rule() {
        assert_eq!(MovementKind::Inbound.delta(50), 50);
        assert_eq!(MovementKind::Outbound.delta(70), -70);
        // Outbound always subtracts the magnitude, even for a negative input
        assert_eq!(MovementKind::Outbound.delta(-70), -70);
    }

    #[test]
    fn test_kind_parsing_is_closed() {
        assert_eq!("INBOUND".parse::<MovementKind>().unwrap(), MovementKind::Inbound);
        assert_eq!("OUTBOUND".parse::<MovementKind>().unwrap(), MovementKind::Outbound);
        assert!(" INBOUND ".parse::<MovementKind>().is_ok());

        // Typos are rejected, never treated as outbound
        assert!("OUTBOND".parse::<MovementKind>().is_err());
        assert!("inbound".parse::<MovementKind>().is_err());
        assert!("".parse::<MovementKind>().is_err());
    }

    #[test]
    fn test_kind_serde_round_trip() {
        let json = serde_json::to_string(&MovementKind::Inbound).unwrap();
        assert_eq!(json, "\"INBOUND\"");
        let kind: MovementKind = serde_json::from_str("\"OUTBOUND\"").unwrap();
        assert_eq!(kind, MovementKind::Outbound);
        assert!(serde_json::from_str::<MovementKind>("\"SIDEWAYS\"").is_err());
    }

    #[test]
    fn test_new_product_numeric_defaults() {
        let p: NewProduct = serde_json::from_str(r#"{"name":"Bolt"}"#).unwrap();
        assert_eq!(p.quantity, 0);
        assert_eq!(p.min_quantity, 0);
        assert!(p.category.is_none());
    }

    #[test]
    fn test_low_stock_is_strict() {
        let mut p = Product {
            id: 1,
            name: "Bolt".to_string(),
            quantity: 3,
            min_quantity: 5,
            category: None,
            location: None,
        };
        assert!(p.is_low_stock());

        p.quantity = 5;
        assert!(!p.is_low_stock());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }
}
