//! # Storage Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ApiError (stockroom-api) ← Structured {code, message} result       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Caller displays a user-friendly message                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use stockroom_core::ValidationError;

/// Store operation errors.
///
/// These wrap sqlx errors and carry the taxonomy the boundary needs:
/// validation, not-found, referential integrity, and storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - An update or delete matched zero rows
    /// - A lookup by id returned nothing
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// Input failed domain validation. Raised before any mutation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A movement references a product that does not exist.
    ///
    /// ## When This Occurs
    /// - Ledger append with a stale or bogus product_id
    /// - The underlying FOREIGN KEY constraint fired
    #[error("referential integrity violation: {message}")]
    ReferentialIntegrity { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Transaction begin/commit failed; all statements were rolled back.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Creates a ReferentialIntegrity error.
    pub fn referential(message: impl Into<String>) -> Self {
        StoreError::ReferentialIntegrity {
            message: message.into(),
        }
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (FK)  → StoreError::ReferentialIntegrity
/// sqlx::Error::Database       → StoreError::QueryFailed
/// sqlx::Error::PoolTimedOut   → StoreError::PoolExhausted
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraint failures in the message text:
                // "FOREIGN KEY constraint failed"
                if msg.contains("FOREIGN KEY constraint failed") {
                    StoreError::ReferentialIntegrity {
                        message: msg.to_string(),
                    }
                } else {
                    StoreError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,

            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("pool is closed".to_string()),

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
