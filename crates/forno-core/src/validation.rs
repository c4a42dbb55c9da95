//! # Validation Module
//!
//! Input validation utilities for Forno.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Terminal prompt (apps/terminal)                           │
//! │  ├── Reads the raw line                                             │
//! │  └── THIS MODULE: parses and validates it                           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Constructors and store operations                         │
//! │  ├── Re-validate on entity creation                                 │
//! │  └── Registry-wide rules (classic dough, price ceiling)             │
//! │                                                                     │
//! │  A failed parse aborts the operation with the store unchanged;      │
//! │  the surrounding menu loop simply renders again (no retry policy).  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use forno_core::validation::{parse_amount, validate_item_name};
//!
//! let price = parse_amount("price", "12.50").unwrap();
//! assert_eq!(price.cents(), 1250);
//!
//! assert!(validate_item_name("name", "  ").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog or customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `MAX_NAME_LEN` characters
///
/// ## Returns
/// The trimmed name, which is what gets stored.
pub fn validate_item_name(field: &'static str, raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an already-parsed amount.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_amount(field: &'static str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount { field });
    }

    Ok(())
}

/// Parses a decimal amount from free-form line input.
///
/// ## Accepted Forms
/// `12`, `12.5`, `12.50`: an integer part with at most two decimal digits.
///
/// ## Rules
/// - Non-numeric input → `InvalidAmount`
/// - More than two decimal digits → `InvalidAmount` (rejected, not rounded)
/// - Negative input parses but is rejected with `NegativeAmount`
///
/// ## Example
/// ```rust
/// use forno_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("price", "8").unwrap().cents(), 800);
/// assert_eq!(parse_amount("price", "1.5").unwrap().cents(), 150);
/// assert_eq!(parse_amount("price", " 12.70 ").unwrap().cents(), 1270);
/// assert!(parse_amount("price", "twelve").is_err());
/// assert!(parse_amount("price", "-3").is_err());
/// ```
pub fn parse_amount(field: &'static str, raw: &str) -> ValidationResult<Money> {
    let trimmed = raw.trim();
    let invalid = || ValidationError::InvalidAmount {
        field,
        raw: trimmed.to_string(),
    };

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (major_str, minor) = match digits.split_once('.') {
        Some((major, minor_str)) => {
            let fractional = matches!(minor_str.len(), 1 | 2)
                && minor_str.bytes().all(|b| b.is_ascii_digit());
            if !fractional {
                return Err(invalid());
            }
            let parsed: i64 = minor_str.parse().map_err(|_| invalid())?;
            // one decimal digit means tenths: "1.5" is 1.50
            let minor = if minor_str.len() == 1 { parsed * 10 } else { parsed };
            (major, minor)
        }
        None => (digits, 0),
    };

    if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let major: i64 = major_str.parse().map_err(|_| invalid())?;

    if negative {
        return Err(ValidationError::NegativeAmount { field });
    }

    Ok(Money::from_major_minor(major, minor))
}

// =============================================================================
// Selection Parsing
// =============================================================================

/// Parses a menu selection number from free-form line input.
///
/// Selections are 1-based in every listing; `0` conventionally means
/// back/stop and is returned as a number like any other; interpreting it is
/// the menu's job.
pub fn parse_selection(raw: &str) -> ValidationResult<usize> {
    let trimmed = raw.trim();

    trimmed
        .parse::<usize>()
        .map_err(|_| ValidationError::InvalidSelection {
            raw: trimmed.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("name", "Mozzarella").unwrap(), "Mozzarella");
        assert_eq!(validate_item_name("name", "  Ham ").unwrap(), "Ham");

        assert!(validate_item_name("name", "").is_err());
        assert!(validate_item_name("name", "   ").is_err());
        assert!(validate_item_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_parse_amount_whole() {
        assert_eq!(parse_amount("price", "8").unwrap().cents(), 800);
        assert_eq!(parse_amount("price", "0").unwrap().cents(), 0);
        assert_eq!(parse_amount("price", "120").unwrap().cents(), 12000);
    }

    #[test]
    fn test_parse_amount_decimals() {
        assert_eq!(parse_amount("price", "1.5").unwrap().cents(), 150);
        assert_eq!(parse_amount("price", "12.70").unwrap().cents(), 1270);
        assert_eq!(parse_amount("price", "0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("price", "twelve").is_err());
        assert!(parse_amount("price", "").is_err());
        assert!(parse_amount("price", "1.234").is_err());
        assert!(parse_amount("price", "1.").is_err());
        assert!(parse_amount("price", ".5").is_err());
        assert!(parse_amount("price", "1,5").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        let err = parse_amount("price", "-3").unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));

        // garbage after the sign is a parse failure, not a sign failure
        assert!(matches!(
            parse_amount("price", "-abc").unwrap_err(),
            ValidationError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1").unwrap(), 1);
        assert_eq!(parse_selection(" 0 ").unwrap(), 0);
        assert!(parse_selection("x").is_err());
        assert!(parse_selection("-1").is_err());
        assert!(parse_selection("").is_err());
    }
}
