//! # Error Types
//!
//! Domain-specific error types for forno-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  forno-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Terminal app errors (apps/terminal)                                │
//! │  └── AppError         - What the user sees (one printed line)       │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → AppError → printed message     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (names, prices, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Note that an out-of-range delete is deliberately NOT an error anywhere in
//! this crate: `Store::remove_*_at` returns `Option`, and `None` is the
//! silent no-op branch.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are caught at the terminal boundary and translated to one printed
/// line; the operation that produced them leaves the store unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A non-classic dough was priced above the classic-dough ceiling.
    ///
    /// ## When This Occurs
    /// - A classic dough exists, and a new non-classic dough is added at
    ///   more than 1.2× the classic's price
    ///
    /// The insert is rejected and the dough registry is unchanged.
    #[error("dough '{name}' at {price} exceeds the ceiling of {ceiling} (1.2x the classic dough)")]
    DoughAboveCeiling {
        name: String,
        price: Money,
        ceiling: Money,
    },

    /// An order was asked to accept a pizza after being completed.
    #[error("{order} is completed, no more items can be added")]
    OrderCompleted { order: String },

    /// Order composition started without any dough in the catalog.
    ///
    /// Reported before any prompt is issued: every pizza needs a dough, so
    /// there is nothing to compose yet.
    #[error("no dough types exist yet, add one first")]
    NoDoughAvailable,

    /// A pizza flow needs a registry that is currently empty.
    #[error("no {registry} exist yet")]
    EmptyRegistry { registry: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A monetary amount was negative. Negative prices are rejected
    /// outright, never clamped to zero.
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    /// Input could not be parsed as a decimal amount.
    #[error("{field} '{raw}' is not a valid amount")]
    InvalidAmount { field: &'static str, raw: String },

    /// Input could not be parsed as a menu selection.
    #[error("'{raw}' is not a valid selection")]
    InvalidSelection { raw: String },

    /// A custom pizza was built with no ingredients.
    #[error("a custom pizza needs at least one ingredient")]
    NoIngredients,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DoughAboveCeiling {
            name: "Cheese-stuffed".to_string(),
            price: Money::from_cents(1300),
            ceiling: Money::from_cents(1200),
        };
        assert_eq!(
            err.to_string(),
            "dough 'Cheese-stuffed' at 13.00 exceeds the ceiling of 12.00 (1.2x the classic dough)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidAmount {
            field: "price",
            raw: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price 'abc' is not a valid amount");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
