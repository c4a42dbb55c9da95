//! # Store: In-Memory Registries
//!
//! The store owns the four registries (ingredients, doughs, recipes,
//! orders) and enforces every rule that spans more than one entity.
//!
//! ## Position vs Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Store Registries                               │
//! │                                                                     │
//! │  ingredients: Vec<Ingredient> ──┐                                   │
//! │  doughs:      Vec<Dough>        │  1-based POSITION for menus       │
//! │  recipes:     Vec<Recipe>       │  (stable insertion order)         │
//! │  orders:      Vec<Order>      ──┘                                   │
//! │                                                                     │
//! │  UUID for IDENTITY: pizzas reference catalog entries by id, and     │
//! │  the store answers the live price lookups pricing depends on.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Delete Contract
//! `remove_*_at` takes a 0-based position and returns `Option<T>`. An
//! out-of-range position is a silent no-op: `None` comes back, nothing is
//! logged, nothing is raised. The contract is uniform across all four
//! registries.
//!
//! The store is constructed explicitly and passed by reference to every
//! operation that needs it; there are no module-level singletons. Nothing
//! here is safe under concurrent mutation: a concurrent wrapper must put
//! mutual exclusion around every `&mut self` method.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::types::{Dough, Ingredient, Recipe};
use crate::DOUGH_CEILING_TENTHS;

/// In-memory state for one run of the application. All of it is lost on
/// process exit.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    ingredients: Vec<Ingredient>,
    doughs: Vec<Dough>,
    recipes: Vec<Recipe>,
    orders: Vec<Order>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    // =========================================================================
    // Ingredients
    // =========================================================================

    /// Validates and appends an ingredient.
    pub fn add_ingredient(&mut self, name: &str, price: Money) -> CoreResult<&Ingredient> {
        let ingredient = Ingredient::new(name, price)?;
        self.ingredients.push(ingredient);
        Ok(&self.ingredients[self.ingredients.len() - 1])
    }

    /// Ingredients in stable insertion order.
    #[inline]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Mutable access to the ingredient at a 0-based position, for price
    /// edits. `None` when out of range.
    pub fn ingredient_at_mut(&mut self, pos: usize) -> Option<&mut Ingredient> {
        self.ingredients.get_mut(pos)
    }

    /// Removes the ingredient at a 0-based position. Out of range is a
    /// silent no-op returning `None`.
    pub fn remove_ingredient_at(&mut self, pos: usize) -> Option<Ingredient> {
        if pos < self.ingredients.len() {
            Some(self.ingredients.remove(pos))
        } else {
            None
        }
    }

    /// Current price of the ingredient with this id, if it still exists.
    pub fn ingredient_price(&self, id: Uuid) -> Option<Money> {
        self.ingredients.iter().find(|i| i.id == id).map(|i| i.price())
    }

    /// Precondition for the custom-pizza flow: reported before any prompt.
    pub fn ensure_ingredients_available(&self) -> CoreResult<()> {
        if self.ingredients.is_empty() {
            return Err(CoreError::EmptyRegistry {
                registry: "ingredients",
            });
        }
        Ok(())
    }

    // =========================================================================
    // Doughs
    // =========================================================================

    /// Validates and appends a dough, enforcing the registry-wide rules:
    ///
    /// - inserting a classic dough clears the classic flag on every other
    ///   dough, so at most one classic exists at any time;
    /// - a non-classic dough may cost at most 1.2× the current classic's
    ///   price (checked only when a classic exists). A violation is
    ///   rejected with [`CoreError::DoughAboveCeiling`] and the registry is
    ///   left untouched.
    pub fn add_dough(&mut self, name: &str, price: Money, is_classic: bool) -> CoreResult<&Dough> {
        let dough = Dough::new(name, price, is_classic)?;

        if is_classic {
            for existing in &mut self.doughs {
                existing.is_classic = false;
            }
        } else if let Some(classic_price) = self.classic_dough().map(|d| d.price()) {
            // exact integer comparison: price ≤ classic × 1.2
            if price.cents() * 10 > classic_price.cents() * DOUGH_CEILING_TENTHS {
                return Err(CoreError::DoughAboveCeiling {
                    name: dough.name,
                    price,
                    ceiling: classic_price.scale_tenths(DOUGH_CEILING_TENTHS),
                });
            }
        }

        self.doughs.push(dough);
        Ok(&self.doughs[self.doughs.len() - 1])
    }

    /// Doughs in stable insertion order.
    #[inline]
    pub fn doughs(&self) -> &[Dough] {
        &self.doughs
    }

    /// Mutable access to the dough at a 0-based position, for price edits.
    pub fn dough_at_mut(&mut self, pos: usize) -> Option<&mut Dough> {
        self.doughs.get_mut(pos)
    }

    /// Removes the dough at a 0-based position. Out of range is a silent
    /// no-op returning `None`.
    pub fn remove_dough_at(&mut self, pos: usize) -> Option<Dough> {
        if pos < self.doughs.len() {
            Some(self.doughs.remove(pos))
        } else {
            None
        }
    }

    /// Current price of the dough with this id, if it still exists.
    pub fn dough_price(&self, id: Uuid) -> Option<Money> {
        self.doughs.iter().find(|d| d.id == id).map(|d| d.price())
    }

    /// The designated reference dough, if one exists.
    pub fn classic_dough(&self) -> Option<&Dough> {
        self.doughs.iter().find(|d| d.is_classic())
    }

    /// Precondition for order composition: every pizza needs a dough, so
    /// the flow is refused before any prompt when none exist.
    pub fn ensure_dough_available(&self) -> CoreResult<()> {
        if self.doughs.is_empty() {
            return Err(CoreError::NoDoughAvailable);
        }
        Ok(())
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    /// Validates and appends a recipe.
    pub fn add_recipe(&mut self, name: &str, base_price: Money) -> CoreResult<&Recipe> {
        let recipe = Recipe::new(name, base_price)?;
        self.recipes.push(recipe);
        Ok(&self.recipes[self.recipes.len() - 1])
    }

    /// Recipes in stable insertion order.
    #[inline]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Removes the recipe at a 0-based position. Out of range is a silent
    /// no-op returning `None`.
    pub fn remove_recipe_at(&mut self, pos: usize) -> Option<Recipe> {
        if pos < self.recipes.len() {
            Some(self.recipes.remove(pos))
        } else {
            None
        }
    }

    /// Precondition for the menu-pizza flow.
    pub fn ensure_recipes_available(&self) -> CoreResult<()> {
        if self.recipes.is_empty() {
            return Err(CoreError::EmptyRegistry { registry: "recipes" });
        }
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Files a composed order.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Orders in stable insertion order.
    #[inline]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Removes the order at a 0-based position. Same silent contract as
    /// every other registry.
    pub fn remove_order_at(&mut self, pos: usize) -> Option<Order> {
        if pos < self.orders.len() {
            Some(self.orders.remove(pos))
        } else {
            None
        }
    }

    /// All orders sorted by descending total price. A pure read: the store
    /// sequence is untouched.
    pub fn orders_by_total_desc(&self) -> Vec<&Order> {
        let mut sorted: Vec<&Order> = self.orders.iter().collect();
        sorted.sort_by(|a, b| b.total(self).cmp(&a.total(self)));
        sorted
    }

    /// Orders whose customer name contains the query, case-insensitively.
    /// A pure read in insertion order.
    pub fn orders_for_customer(&self, query: &str) -> Vec<&Order> {
        let needle = query.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| o.customer_name.to_lowercase().contains(&needle))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::Pizza;
    use crate::types::PizzaSize;

    #[test]
    fn test_add_and_list_keeps_insertion_order() {
        let mut store = Store::new();
        store.add_ingredient("Mozzarella", Money::from_cents(200)).unwrap();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        store.add_ingredient("Basil", Money::from_cents(50)).unwrap();

        let names: Vec<&str> = store.ingredients().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Mozzarella", "Ham", "Basil"]);
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut store = Store::new();
        assert!(store.add_ingredient("", Money::from_cents(100)).is_err());
        assert!(store.add_ingredient("Ham", Money::from_cents(-1)).is_err());
        assert!(store.ingredients().is_empty());
    }

    #[test]
    fn test_remove_at_out_of_range_is_silent_noop() {
        let mut store = Store::new();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        store.add_dough("Classic", Money::from_cents(150), true).unwrap();
        store.add_recipe("Margherita", Money::from_cents(800)).unwrap();

        assert!(store.remove_ingredient_at(5).is_none());
        assert!(store.remove_dough_at(1).is_none());
        assert!(store.remove_recipe_at(99).is_none());
        assert!(store.remove_order_at(0).is_none());

        assert_eq!(store.ingredients().len(), 1);
        assert_eq!(store.doughs().len(), 1);
        assert_eq!(store.recipes().len(), 1);
    }

    #[test]
    fn test_remove_at_returns_the_entity() {
        let mut store = Store::new();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        store.add_ingredient("Basil", Money::from_cents(50)).unwrap();

        let removed = store.remove_ingredient_at(0).unwrap();
        assert_eq!(removed.name, "Ham");
        assert_eq!(store.ingredients().len(), 1);
        assert_eq!(store.ingredients()[0].name, "Basil");
    }

    #[test]
    fn test_second_classic_clears_the_first() {
        let mut store = Store::new();
        store.add_dough("Classic", Money::from_cents(1000), true).unwrap();
        store.add_dough("New classic", Money::from_cents(900), true).unwrap();

        let classics: Vec<&Dough> = store.doughs().iter().filter(|d| d.is_classic()).collect();
        assert_eq!(classics.len(), 1);
        assert_eq!(classics[0].name, "New classic");
    }

    #[test]
    fn test_ceiling_scenario() {
        let mut store = Store::new();
        store.add_dough("Classic", Money::from_cents(1000), true).unwrap();

        // 13.00 > 12.00 → rejected, registry unchanged
        let err = store
            .add_dough("Stuffed", Money::from_cents(1300), false)
            .unwrap_err();
        assert!(matches!(err, CoreError::DoughAboveCeiling { .. }));
        assert_eq!(store.doughs().len(), 1);

        // 11.50 ≤ 12.00 → accepted
        store.add_dough("Thin", Money::from_cents(1150), false).unwrap();
        assert_eq!(store.doughs().len(), 2);

        // exactly 12.00 is on the ceiling, not above it
        store.add_dough("Sesame", Money::from_cents(1200), false).unwrap();
        assert_eq!(store.doughs().len(), 3);
    }

    #[test]
    fn test_ceiling_skipped_without_classic() {
        let mut store = Store::new();
        // no classic exists, any non-negative price goes in
        store.add_dough("Deluxe", Money::from_cents(99999), false).unwrap();
        assert_eq!(store.doughs().len(), 1);
    }

    #[test]
    fn test_classic_itself_is_not_capped() {
        let mut store = Store::new();
        store.add_dough("Classic", Money::from_cents(1000), true).unwrap();
        // a new classic may be arbitrarily expensive; it becomes the reference
        store.add_dough("Premium classic", Money::from_cents(5000), true).unwrap();
        assert_eq!(store.classic_dough().unwrap().name, "Premium classic");
    }

    #[test]
    fn test_price_lookup_by_id() {
        let mut store = Store::new();
        let id = store.add_ingredient("Ham", Money::from_cents(300)).unwrap().id;
        assert_eq!(store.ingredient_price(id).unwrap().cents(), 300);

        store.remove_ingredient_at(0);
        assert!(store.ingredient_price(id).is_none());
    }

    #[test]
    fn test_preconditions() {
        let mut store = Store::new();
        assert!(matches!(
            store.ensure_dough_available().unwrap_err(),
            CoreError::NoDoughAvailable
        ));
        assert!(matches!(
            store.ensure_recipes_available().unwrap_err(),
            CoreError::EmptyRegistry { registry: "recipes" }
        ));
        assert!(store.ensure_ingredients_available().is_err());

        store.add_dough("Classic", Money::from_cents(150), true).unwrap();
        assert!(store.ensure_dough_available().is_ok());
    }

    fn filed_order(store: &mut Store, customer: &str, recipe_idx: usize, size: PizzaSize) {
        let pizza = Pizza::from_recipe(&store.recipes()[recipe_idx], size, &store.doughs()[0]);
        let mut order = Order::new(customer).unwrap();
        order.add_item(pizza).unwrap();
        order.complete();
        store.add_order(order);
    }

    #[test]
    fn test_orders_by_total_desc() {
        let mut store = Store::new();
        store.add_dough("Classic", Money::from_cents(150), true).unwrap();
        store.add_recipe("Margherita", Money::from_cents(800)).unwrap();
        store.add_recipe("Diavola", Money::from_cents(750)).unwrap();

        // Ada: 8.00 × 1.4 + 1.50 = 12.70
        filed_order(&mut store, "Ada", 0, PizzaSize::Large);
        // Bob: 7.50 × 1.0 + 1.50 = 9.00
        filed_order(&mut store, "Bob", 1, PizzaSize::Small);

        let sorted = store.orders_by_total_desc();
        assert_eq!(sorted[0].customer_name, "Ada");
        assert_eq!(sorted[0].total(&store).cents(), 1270);
        assert_eq!(sorted[1].total(&store).cents(), 900);

        // the underlying sequence is untouched
        assert_eq!(store.orders()[0].customer_name, "Ada");
        assert_eq!(store.orders()[1].customer_name, "Bob");
    }

    #[test]
    fn test_orders_for_customer_is_case_insensitive_substring() {
        let mut store = Store::new();
        store.add_dough("Classic", Money::from_cents(150), true).unwrap();
        store.add_recipe("Margherita", Money::from_cents(800)).unwrap();

        filed_order(&mut store, "Alexandra", 0, PizzaSize::Small);
        filed_order(&mut store, "Alex", 0, PizzaSize::Small);
        filed_order(&mut store, "Bob", 0, PizzaSize::Small);

        let hits = store.orders_for_customer("aLeX");
        assert_eq!(hits.len(), 2);
        assert!(store.orders_for_customer("xyz").is_empty());
    }
}
