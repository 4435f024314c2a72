//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  ├── CoreError        - Purchase / lookup failures                     │
//! │  └── ValidationError  - Input and catalog validation failures          │
//! │                                                                         │
//! │  vend-cli errors (app crate)                                           │
//! │  ├── ConfigError      - Bad environment / flag values                  │
//! │  └── ShellError       - Console I/O failures                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shell message → customer          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal to a vending session: the shell prints the
//! message and asks for the next product.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No catalog entry has the requested ID.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product exists but the available credit does not cover it.
    ///
    /// ## User Workflow
    /// ```text
    /// Insert 20 kr (HundredNotes policy: credits nothing)
    ///      │
    ///      ▼
    /// Purchase "D1" (cost 20 kr)
    ///      │
    ///      ▼
    /// InsufficientFunds { id: "D1", cost: 20 kr, available: 0 kr }
    /// ```
    #[error("Insufficient funds for {id}: costs {cost}, available {available}")]
    InsufficientFunds {
        id: String,
        cost: Money,
        available: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. whitespace inside a product ID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set (e.g. a 7 kr coin).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. two products sharing an ID).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
