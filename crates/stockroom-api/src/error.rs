//! # API Error Type
//!
//! Unified error type for boundary operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow at the Boundary                        │
//! │                                                                     │
//! │  View layer                  Store                                  │
//! │  ──────────                  ─────                                  │
//! │                                                                     │
//! │  inventory.add_movement(...)                                        │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │  Facade operation: Result<T, ApiError>                       │  │
//! │  │         │                                                    │  │
//! │  │  Validation failed? ── StoreError::Validation ──┐            │  │
//! │  │  Missing product?   ── StoreError::NotFound ────┼─ ApiError ─►  │
//! │  │  Engine fault?      ── StoreError::QueryFailed ─┘ (logged)   │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  Caller receives { "code": "NOT_FOUND", "message": "..." } -        │
//! │  never a raw fault, never a silent swallow.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage internals (SQL text, engine messages) are logged via `tracing`
//! and replaced with a generic message before they reach the caller.

use serde::Serialize;

use stockroom_db::StoreError;

/// Structured error returned from every boundary operation.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for boundary responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Operation targeted a nonexistent id
    NotFound,

    /// Malformed or missing required input
    ValidationError,

    /// A movement referenced a nonexistent product
    ReferentialIntegrity,

    /// Underlying engine failure (disk, corruption, lock timeout)
    StorageError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to boundary errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, id),

            StoreError::Validation(e) => ApiError::validation(e.to_string()),

            StoreError::ReferentialIntegrity { message } => {
                ApiError::new(ErrorCode::ReferentialIntegrity, message)
            }

            // Engine faults: log the cause, return a generic message
            StoreError::ConnectionFailed(e) => {
                tracing::error!("store connection failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Store connection failed")
            }
            StoreError::MigrationFailed(e) => {
                tracing::error!("store migration failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Store migration failed")
            }
            StoreError::QueryFailed(e) => {
                tracing::error!("store query failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Store operation failed")
            }
            StoreError::TransactionFailed(e) => {
                tracing::error!("store transaction failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Store transaction failed")
            }
            StoreError::PoolExhausted => {
                ApiError::new(ErrorCode::StorageError, "Store connection pool exhausted")
            }
            StoreError::Internal(e) => {
                tracing::error!("internal store error: {}", e);
                ApiError::new(ErrorCode::StorageError, "Store operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ValidationError;

    #[test]
    fn test_not_found_maps_to_code_and_message() {
        let err: ApiError = StoreError::not_found("Product", 42).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");
    }

    #[test]
    fn test_validation_keeps_the_field_message() {
        let err: ApiError = StoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_engine_faults_are_generic_to_the_caller() {
        let err: ApiError = StoreError::QueryFailed("no such table: secrets".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("secrets"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", 7);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 7");
    }
}
