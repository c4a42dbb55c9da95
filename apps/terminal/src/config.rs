//! Terminal configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There is deliberately very little of it: the currency suffix
//! printed after every amount, and the greeting banner toggle.

use serde::{Deserialize, Serialize};
use std::env;

use forno_core::Money;

/// Terminal front-end configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Currency suffix appended to every printed amount ("12.70 €").
    pub currency: String,

    /// Whether to print the greeting banner above the main menu.
    pub show_banner: bool,
}

impl TerminalConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let currency = env::var("FORNO_CURRENCY").unwrap_or_else(|_| "€".to_string());
        if currency.trim().is_empty() {
            return Err(ConfigError::InvalidValue("FORNO_CURRENCY".to_string()));
        }

        let show_banner = env::var("FORNO_BANNER")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(TerminalConfig {
            currency,
            show_banner,
        })
    }

    /// Formats an amount with two decimals and the configured suffix.
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{} {}", amount, self.currency)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            currency: "€".to_string(),
            show_banner: true,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
