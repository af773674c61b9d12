//! # stockroom-core: Pure Domain Logic for the Inventory Store
//!
//! This crate is the **heart** of the stockroom workspace. It contains the
//! domain model and the rules that govern it, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 stockroom-api (Boundary)                    │   │
//! │  │    get_products, add_movement, low_stock, export, ...       │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐   ┌────────────┐   ┌────────────┐          │   │
//! │  │   │   types   │   │ validation │   │   error    │          │   │
//! │  │   │  Product  │   │   rules    │   │  typed     │          │   │
//! │  │   │  Movement │   │   checks   │   │  failures  │          │   │
//! │  │   └───────────┘   └────────────┘   └────────────┘          │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                stockroom-db (Storage Layer)                 │   │
//! │  │          SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Movement, MovementKind, Page)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Closed Enums**: The movement kind is a two-variant enum; unrecognized
//!    input is rejected, never silently coerced
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Product` instead of
// `use stockroom_core::types::Product`

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum accepted length for a product name.
///
/// ## Business Reason
/// Keeps the catalog display and the name index bounded. Long free text
/// belongs in the movement `note` field, not the name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum accepted length for a search query.
///
/// Longer input is almost certainly a paste mistake; rejecting it early
/// keeps the LIKE patterns bounded.
pub const MAX_QUERY_LEN: usize = 100;
