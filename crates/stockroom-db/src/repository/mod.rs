//! # Repository Module
//!
//! Repository implementations for the inventory store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Boundary call                                                      │
//! │       │                                                             │
//! │       │  store.movements().add(new_movement)                        │
//! │       ▼                                                             │
//! │  MovementRepository                                                 │
//! │  ├── add(&self, movement)     ← ledger insert + delta, one tx       │
//! │  └── list(&self)                                                    │
//! │       │                                                             │
//! │       │  SQL                                                        │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Transaction scopes live next to the statements they protect      │
//! │  • Clean separation of concerns                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog CRUD with cascade delete
//! - [`movement::MovementRepository`] - Append-only ledger; sole writer of
//!   quantity deltas
//! - [`query::QueryRepository`] - Search, paging, low stock, export

pub mod movement;
pub mod product;
pub mod query;
