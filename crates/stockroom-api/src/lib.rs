//! # stockroom-api: Boundary Facade for the Inventory Store
//!
//! The request/response surface exposed to the view/glue layer. Every
//! operation takes plain inputs, returns a serializable DTO, and converts
//! any internal failure into a structured [`ApiError`]; the caller never
//! sees a raw fault and no error is silently swallowed.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Inventory (facade)                             │
//! │                                                                     │
//! │  get_products()            → ordered product list                   │
//! │  get_products_paged(...)   → {items, page, totalItems, totalPages}  │
//! │  create_product(fields)    → {id}                                   │
//! │  update_product(fields)    → ack                                    │
//! │  delete_product(id)        → ack                                    │
//! │  add_movement(fields)      → ack                                    │
//! │  get_movements()           → ledger w/ product names, newest first  │
//! │  low_stock()               → products below threshold               │
//! │  search_products(text)     → matching products                      │
//! │  export_snapshot()         → full catalog rows (for CSV outside)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The facade holds an injected [`Store`] handle; it owns no state of its
//! own and adds no semantics beyond DTO mapping and error shaping.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use dto::{CreatedDto, MovementDto, PagedProductsDto, ProductDto};
pub use error::{ApiError, ErrorCode};

use tracing::debug;

use stockroom_core::{NewMovement, NewProduct, ProductUpdate};
use stockroom_db::Store;

/// Result type for boundary operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// The boundary facade over an opened [`Store`].
#[derive(Debug, Clone)]
pub struct Inventory {
    store: Store,
}

impl Inventory {
    /// Wraps an opened store handle.
    pub fn new(store: Store) -> Self {
        Inventory { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// All products, ordered by name.
    pub async fn get_products(&self) -> ApiResult<Vec<ProductDto>> {
        debug!("get_products");
        let products = self.store.products().list_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// One page of products matching the search filter.
    pub async fn get_products_paged(
        &self,
        search: &str,
        page: i64,
        page_size: i64,
    ) -> ApiResult<PagedProductsDto> {
        debug!(search = %search, page = page, page_size = page_size, "get_products_paged");
        let result = self
            .store
            .queries()
            .list_paged(search, page, page_size)
            .await?;
        Ok(PagedProductsDto::from(result))
    }

    /// Creates a product and returns its assigned id.
    pub async fn create_product(&self, product: NewProduct) -> ApiResult<CreatedDto> {
        debug!(name = %product.name, "create_product");
        let id = self.store.products().create(&product).await?;
        Ok(CreatedDto { id })
    }

    /// Replaces all mutable fields of an existing product.
    pub async fn update_product(&self, product: ProductUpdate) -> ApiResult<()> {
        debug!(id = product.id, "update_product");
        self.store.products().update(&product).await?;
        Ok(())
    }

    /// Deletes a product and its ledger rows atomically.
    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        debug!(id = id, "delete_product");
        self.store.products().delete(id).await?;
        Ok(())
    }

    /// Appends a movement; the ledger stamps the timestamp and applies the
    /// delta in one transaction.
    pub async fn add_movement(&self, movement: NewMovement) -> ApiResult<()> {
        debug!(product_id = movement.product_id, kind = %movement.kind, "add_movement");
        self.store.movements().add(&movement).await?;
        Ok(())
    }

    /// The full ledger with product names, newest first.
    pub async fn get_movements(&self) -> ApiResult<Vec<MovementDto>> {
        debug!("get_movements");
        let records = self.store.movements().list().await?;
        Ok(records.into_iter().map(MovementDto::from).collect())
    }

    /// Products strictly below their minimum, ordered by name.
    pub async fn low_stock(&self) -> ApiResult<Vec<ProductDto>> {
        debug!("low_stock");
        let products = self.store.queries().low_stock().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Case-insensitive substring search over name, category and location.
    pub async fn search_products(&self, text: &str) -> ApiResult<Vec<ProductDto>> {
        debug!(text = %text, "search_products");
        let products = self.store.queries().search(text).await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Full catalog rows for bulk external consumption (CSV serialization
    /// happens outside the store).
    pub async fn export_snapshot(&self) -> ApiResult<Vec<ProductDto>> {
        debug!("export_snapshot");
        let rows = self.store.queries().export_snapshot().await?;
        Ok(rows.into_iter().map(ProductDto::from).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
