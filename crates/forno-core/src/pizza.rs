//! # Pizza: The Composite Item
//!
//! A pizza combines a size, a dough, and a body (either a recipe or an
//! explicit ingredient list) and derives its price from those parts.
//!
//! ## Price Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Pizza Price Derivation                          │
//! │                                                                     │
//! │  Recipe mode:       base_price ──┐                                  │
//! │                                  ├─► × size multiplier ─► + dough   │
//! │  Ingredient mode:   Σ prices ────┘                                  │
//! │                                                                     │
//! │  Multipliers: Small ×1.0, Medium ×1.2, Large ×1.4                   │
//! │  The dough price is added AFTER the multiplier, never scaled.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Non-Owning References
//! A pizza never owns its dough or ingredients. It records each referent's
//! id plus a snapshot of the price-relevant fields taken at creation:
//!
//! - while the referent still exists in the store, [`Pizza::price`] reads
//!   the LIVE price, so catalog price edits propagate to every pizza;
//! - once the referent is deleted, the snapshot answers, so deletion never
//!   corrupts an existing pizza.
//!
//! Recipes are different: their base price is copied by value and the pizza
//! keeps no reference back at all.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::store::Store;
use crate::types::{Dough, Ingredient, PizzaSize, Recipe};

/// Display name given to pizzas assembled from an explicit ingredient list.
pub const CUSTOM_PIZZA_NAME: &str = "Custom Pizza";

// =============================================================================
// Referent Snapshots
// =============================================================================

/// A non-owning reference to a dough: its id plus a creation-time snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoughRef {
    /// Id of the referenced dough in the store.
    pub dough_id: Uuid,

    /// Dough name at creation time.
    pub name: String,

    /// Dough price at creation time, used only once the dough is deleted.
    price_cents: i64,
}

impl DoughRef {
    fn snapshot(dough: &Dough) -> Self {
        DoughRef {
            dough_id: dough.id,
            name: dough.name.clone(),
            price_cents: dough.price().cents(),
        }
    }

    /// The snapshotted price.
    #[inline]
    pub fn snapshot_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A non-owning reference to an ingredient, same snapshot contract as
/// [`DoughRef`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRef {
    /// Id of the referenced ingredient in the store.
    pub ingredient_id: Uuid,

    /// Ingredient name at creation time.
    pub name: String,

    price_cents: i64,
}

impl IngredientRef {
    fn snapshot(ingredient: &Ingredient) -> Self {
        IngredientRef {
            ingredient_id: ingredient.id,
            name: ingredient.name.clone(),
            price_cents: ingredient.price().cents(),
        }
    }

    /// The snapshotted price.
    #[inline]
    pub fn snapshot_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Pizza Body
// =============================================================================

/// What the size multiplier applies to: a recipe's base price or the sum of
/// picked ingredient prices. A tagged variant under one price contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum PizzaBody {
    /// Built from a recipe; the base price was copied by value.
    FromRecipe { base_price_cents: i64 },

    /// Assembled from an ordered list of ingredient picks.
    FromIngredients { picks: Vec<IngredientRef> },
}

// =============================================================================
// Pizza
// =============================================================================

/// A priced pizza on an order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pizza {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Display name: the recipe name, or [`CUSTOM_PIZZA_NAME`].
    pub name: String,

    /// Chosen size; drives the body multiplier.
    pub size: PizzaSize,

    dough: DoughRef,

    body: PizzaBody,
}

impl Pizza {
    /// Builds a pizza from a recipe.
    ///
    /// The recipe's name and base price are copied by value; deleting the
    /// recipe from the store later does not affect this pizza.
    pub fn from_recipe(recipe: &Recipe, size: PizzaSize, dough: &Dough) -> Self {
        Pizza {
            id: Uuid::new_v4(),
            name: recipe.name.clone(),
            size,
            dough: DoughRef::snapshot(dough),
            body: PizzaBody::FromRecipe {
                base_price_cents: recipe.base_price().cents(),
            },
        }
    }

    /// Assembles a pizza from picked ingredients.
    ///
    /// Requires at least one ingredient. The same ingredient may appear more
    /// than once (double cheese); picks keep their selection order.
    pub fn from_ingredients(
        size: PizzaSize,
        dough: &Dough,
        picks: &[&Ingredient],
    ) -> Result<Self, ValidationError> {
        if picks.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        Ok(Pizza {
            id: Uuid::new_v4(),
            name: CUSTOM_PIZZA_NAME.to_string(),
            size,
            dough: DoughRef::snapshot(dough),
            body: PizzaBody::FromIngredients {
                picks: picks.iter().map(|i| IngredientRef::snapshot(i)).collect(),
            },
        })
    }

    /// Derives the current price. Never cached: every call re-reads the
    /// referenced catalog entries through the store, falling back to the
    /// creation-time snapshot for referents that were deleted.
    pub fn price(&self, store: &Store) -> Money {
        let body = match &self.body {
            PizzaBody::FromRecipe { base_price_cents } => Money::from_cents(*base_price_cents),
            PizzaBody::FromIngredients { picks } => picks
                .iter()
                .map(|p| {
                    store
                        .ingredient_price(p.ingredient_id)
                        .unwrap_or_else(|| p.snapshot_price())
                })
                .sum(),
        };

        let dough = store
            .dough_price(self.dough.dough_id)
            .unwrap_or_else(|| self.dough.snapshot_price());

        self.size.apply(body) + dough
    }

    /// Name of the dough this pizza was built on.
    #[inline]
    pub fn dough_name(&self) -> &str {
        &self.dough.name
    }

    /// Comma-joined ingredient names, for ingredient-mode pizzas only.
    pub fn ingredient_list(&self) -> Option<String> {
        match &self.body {
            PizzaBody::FromRecipe { .. } => None,
            PizzaBody::FromIngredients { picks } => Some(
                picks
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
