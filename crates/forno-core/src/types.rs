//! # Domain Types
//!
//! Core catalog types used throughout Forno.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐       │
//! │  │   Ingredient   │   │     Dough      │   │     Recipe     │       │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │       │
//! │  │  id (UUID)     │   │  id (UUID)     │   │  id (UUID)     │       │
//! │  │  name          │   │  name          │   │  name          │       │
//! │  │  price_cents   │   │  price_cents   │   │  base_price    │       │
//! │  └────────────────┘   │  is_classic    │   └────────────────┘       │
//! │                       └────────────────┘                            │
//! │                                                                     │
//! │  ┌────────────────┐                                                 │
//! │  │   PizzaSize    │   Small ×1.0  Medium ×1.2  Large ×1.4           │
//! │  └────────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ingredients and doughs are the mutable catalog items: immutable `id`,
//! mutable name/price. Recipes are templates, consumed by value when a pizza
//! is instantiated, with no mutation beyond deletion from the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_amount, validate_item_name};

// =============================================================================
// Pizza Size
// =============================================================================

/// The size of a pizza, carrying its price multiplier.
///
/// ## Multiplier Table
/// The multiplier is stored as integer tenths so price scaling never leaves
/// integer math: Small = 10 (×1.0), Medium = 12 (×1.2), Large = 14 (×1.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    /// Returns the size multiplier in tenths (10 = ×1.0).
    #[inline]
    pub const fn multiplier_tenths(&self) -> i64 {
        match self {
            PizzaSize::Small => 10,
            PizzaSize::Medium => 12,
            PizzaSize::Large => 14,
        }
    }

    /// Applies this size's multiplier to an amount.
    #[inline]
    pub fn apply(&self, amount: Money) -> Money {
        amount.scale_tenths(self.multiplier_tenths())
    }
}

/// Unrecognized input falls back to Small (×1.0).
impl Default for PizzaSize {
    fn default() -> Self {
        PizzaSize::Small
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Ingredient
// =============================================================================

/// A reusable topping with a unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier (UUID v4), assigned at creation, never reused.
    pub id: Uuid,

    /// Display name shown in listings and on order lines.
    pub name: String,

    /// Unit price in cents. Mutated only through [`Ingredient::set_price`].
    price_cents: i64,
}

impl Ingredient {
    /// Creates an ingredient, validating name and price.
    ///
    /// Fails if the name is empty after trimming or the price is negative.
    pub fn new(name: &str, price: Money) -> Result<Self, ValidationError> {
        let name = validate_item_name("name", name)?;
        validate_amount("price", price)?;
        Ok(Ingredient {
            id: Uuid::new_v4(),
            name,
            price_cents: price.cents(),
        })
    }

    /// Returns the current unit price.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Updates the unit price.
    ///
    /// A negative value is silently ignored: the stored price is unchanged
    /// and no error is surfaced.
    pub fn set_price(&mut self, value: Money) {
        if !value.is_negative() {
            self.price_cents = value.cents();
        }
    }
}

// =============================================================================
// Dough
// =============================================================================

/// A dough type: the pizza base whose price is added on top of the
/// size-scaled body price.
///
/// ## The Classic Flag
/// At most one dough is "classic" at any time. The classic dough is the
/// reference price: a non-classic dough may cost at most 1.2× the classic's
/// price at insertion time. Both rules are enforced by the store, which owns
/// the whole dough registry ([`crate::store::Store::add_dough`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dough {
    /// Unique identifier (UUID v4), assigned at creation, never reused.
    pub id: Uuid,

    /// Display name shown in listings and on order lines.
    pub name: String,

    /// Price in cents added to every pizza built on this dough.
    price_cents: i64,

    /// Whether this is the designated reference dough.
    pub(crate) is_classic: bool,
}

impl Dough {
    /// Creates a dough type, validating name and price.
    ///
    /// The classic/ceiling rules are registry-wide and are NOT checked here;
    /// insert through the store to get them.
    pub fn new(name: &str, price: Money, is_classic: bool) -> Result<Self, ValidationError> {
        let name = validate_item_name("name", name)?;
        validate_amount("price", price)?;
        Ok(Dough {
            id: Uuid::new_v4(),
            name,
            price_cents: price.cents(),
            is_classic,
        })
    }

    /// Returns the current price.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Updates the price. Negative values are silently ignored, the same
    /// setter contract as [`Ingredient::set_price`].
    pub fn set_price(&mut self, value: Money) {
        if !value.is_negative() {
            self.price_cents = value.cents();
        }
    }

    /// Whether this is the designated reference dough.
    #[inline]
    pub fn is_classic(&self) -> bool {
        self.is_classic
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// A named pizza template with a base price.
///
/// Recipes are consumed by value: instantiating a pizza copies the name and
/// base price, and the pizza keeps no reference back. Deleting the recipe
/// afterwards has no effect on pizzas already built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier (UUID v4), assigned at creation, never reused.
    pub id: Uuid,

    /// Pizza name, copied onto every pizza built from this recipe.
    pub name: String,

    base_price_cents: i64,
}

impl Recipe {
    /// Creates a recipe, validating name and base price.
    pub fn new(name: &str, base_price: Money) -> Result<Self, ValidationError> {
        let name = validate_item_name("name", name)?;
        validate_amount("base price", base_price)?;
        Ok(Recipe {
            id: Uuid::new_v4(),
            name,
            base_price_cents: base_price.cents(),
        })
    }

    /// Returns the base price the size multiplier applies to.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
