//! # Boundary DTOs
//!
//! Data transfer objects for the view/glue layer.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the API contract
//! - Handles serde rename to camelCase for JS consumption
//! - Keeps wire shapes stable while the domain evolves

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{MovementKind, MovementRecord, Page, Product};

/// Product row as the view layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub min_quantity: i64,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            min_quantity: p.min_quantity,
            category: p.category,
            location: p.location,
        }
    }
}

/// Ledger row with its product name, newest first in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementDto {
    pub id: i64,
    pub product_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub product_name: Option<String>,
}

impl From<MovementRecord> for MovementDto {
    fn from(m: MovementRecord) -> Self {
        MovementDto {
            id: m.id,
            product_id: m.product_id,
            kind: m.kind,
            quantity: m.quantity,
            date: m.date,
            note: m.note,
            product_name: m.product_name,
        }
    }
}

/// One page of products plus pager totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedProductsDto {
    pub items: Vec<ProductDto>,
    pub page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl From<Page<Product>> for PagedProductsDto {
    fn from(page: Page<Product>) -> Self {
        PagedProductsDto {
            items: page.items.into_iter().map(ProductDto::from).collect(),
            page: page.page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

/// Acknowledgment carrying a newly assigned id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreatedDto {
    pub id: i64,
}
