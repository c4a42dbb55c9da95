//! # forno-core: Pure Business Logic for Forno
//!
//! This crate is the **heart** of Forno. It contains all catalog, pricing,
//! and order logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Forno Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                apps/terminal (text menus)                     │  │
//! │  │    prompts ──► parse ──► core operation ──► formatted print   │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ forno-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │  │
//! │  │  │  money  │ │  types  │ │  pizza  │ │  order  │ │  store  │  │  │
//! │  │  │  Money  │ │ Catalog │ │ Pricing │ │ Totals  │ │  Rules  │  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO TERMINAL • NO PERSISTENCE • PURE FUNCTIONS      │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Catalog entities (Ingredient, Dough, Recipe) and PizzaSize
//! - [`pizza`] - The composite item and its price derivation
//! - [`order`] - Customer orders and totals
//! - [`store`] - In-memory registries and cross-entity rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation is deterministic over its inputs
//! 2. **No I/O**: terminal, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **Explicit State**: the [`store::Store`] is built by the caller and
//!    passed to operations; there are no global singletons
//!
//! ## Example Usage
//!
//! ```rust
//! use forno_core::money::Money;
//! use forno_core::pizza::Pizza;
//! use forno_core::store::Store;
//! use forno_core::types::PizzaSize;
//!
//! let mut store = Store::new();
//! store.add_dough("Classic", Money::from_cents(150), true).unwrap();
//! store.add_recipe("Margherita", Money::from_cents(800)).unwrap();
//!
//! let pizza = Pizza::from_recipe(&store.recipes()[0], PizzaSize::Large, &store.doughs()[0]);
//!
//! // 8.00 × 1.4 + 1.50 = 12.70
//! assert_eq!(pizza.price(&store), Money::from_cents(1270));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod pizza;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use forno_core::Money` instead of
// `use forno_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::Order;
pub use pizza::{Pizza, PizzaBody};
pub use store::Store;
pub use types::{Dough, Ingredient, PizzaSize, Recipe};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of any catalog or customer name.
///
/// ## Business Reason
/// Keeps listing lines printable on one terminal row and rejects
/// accidentally pasted blobs.
pub const MAX_NAME_LEN: usize = 200;

/// Ceiling on a non-classic dough's price, in tenths of the classic
/// dough's price: 12 tenths = 1.2×.
///
/// ## Business Reason
/// The classic dough is the reference product; alternatives may carry a
/// premium but never more than 20%, so the menu stays coherently priced.
pub const DOUGH_CEILING_TENTHS: i64 = 12;
