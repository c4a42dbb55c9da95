//! # App Error Type
//!
//! Unified error type for the terminal front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Forno                              │
//! │                                                                     │
//! │  Core operation fails                                               │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  CoreError / ValidationError                                        │
//! │        │                                                            │
//! │        ├── recoverable: printed as one line, menu shows again       │
//! │        │   (validation, precondition, out-of-range selection)       │
//! │        │                                                            │
//! │        └── fatal: AppError bubbles to main, logged, process exits   │
//! │            (terminal stream failure, broken configuration)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In a terminal app, "reporting" an error is printing one line and letting
//! the surrounding menu loop render again. Only stream and configuration
//! failures are fatal.

use std::io;

use thiserror::Error;

use forno_core::{CoreError, ValidationError};

use crate::config::ConfigError;

/// Top-level error for the terminal binary. Anything that reaches `main`
/// through this type is fatal: it gets logged and the process exits.
#[derive(Debug, Error)]
pub enum AppError {
    /// A business rule or validation failure that escaped the menu layer.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Broken configuration at startup.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The input or output stream failed (e.g. stdin closed).
    #[error("terminal stream failed: {0}")]
    Io(#[from] io::Error),
}

/// Validation errors arrive wrapped the same way the core wraps them.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: AppError = ValidationError::Required { field: "name" }.into();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }
}
