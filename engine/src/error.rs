//! Error handling for the Fish Ledger engine
//!
//! Every rejected write surfaces one of these synchronously; the store is
//! left untouched when an error is returned.

use rust_decimal::Decimal;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Payment exceeds pending amount of {pending}")]
    PaymentExceedsPending { pending: Decimal },

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;
