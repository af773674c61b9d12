//! # stockroom-db: Storage Layer for the Inventory Store
//!
//! This crate provides durable storage for the stockroom workspace.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Data Flow                           │
//! │                                                                     │
//! │  Boundary call (add_movement)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-db (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐  │   │
//! │  │   │    Store     │   │ Repositories  │   │  Migrations  │  │   │
//! │  │   │  (pool.rs)   │   │ product.rs    │   │  (embedded)  │  │   │
//! │  │   │              │   │ movement.rs   │   │              │  │   │
//! │  │   │ SqlitePool   │◄──│ query.rs      │   │ 001_init.sql │  │   │
//! │  │   └──────────────┘   └───────────────┘   └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode, foreign keys ON)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Store handle, configuration, explicit open/close lifecycle
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (products, ledger, queries)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("path/to/stockroom.db")).await?;
//!
//! let id = store.products().create(&new_product).await?;
//! store.movements().add(&new_movement).await?;
//! let low = store.queries().low_stock().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::movement::MovementRepository;
pub use repository::product::ProductRepository;
pub use repository::query::QueryRepository;
