//! # Order
//!
//! An order groups the pizzas one customer asked for.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                               │
//! │                                                                     │
//! │  ┌──────────┐   add_item    ┌──────────┐   complete   ┌──────────┐  │
//! │  │  Empty   │──────────────►│ Composing│─────────────►│ Completed│  │
//! │  │  Order   │               │          │              │          │  │
//! │  └──────────┘               └──────────┘              └──────────┘  │
//! │                                  │                         │        │
//! │                              add_item ok              add_item is   │
//! │                                                       rejected      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total is never stored: [`Order::total`] recomputes from the current
//! item prices on every call, so catalog price edits made after the order
//! was taken still show up in its total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pizza::Pizza;
use crate::store::Store;
use crate::validation::validate_item_name;

/// A customer order: an ordered sequence of pizzas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Customer the order belongs to.
    pub customer_name: String,

    /// When the order was opened.
    pub created_at: DateTime<Utc>,

    items: Vec<Pizza>,

    is_completed: bool,
}

impl Order {
    /// Opens a new order for a customer. The name must be non-empty.
    pub fn new(customer_name: &str) -> Result<Self, ValidationError> {
        let customer_name = validate_item_name("customer name", customer_name)?;
        Ok(Order {
            id: Uuid::new_v4(),
            customer_name,
            created_at: Utc::now(),
            items: Vec::new(),
            is_completed: false,
        })
    }

    /// Appends a pizza to the order.
    ///
    /// Rejected once the order has been completed. No price bookkeeping
    /// happens here: prices are always derived at read time.
    pub fn add_item(&mut self, pizza: Pizza) -> CoreResult<()> {
        if self.is_completed {
            return Err(CoreError::OrderCompleted {
                order: self.label(),
            });
        }

        self.items.push(pizza);
        Ok(())
    }

    /// The pizzas on this order, in the sequence they were added.
    #[inline]
    pub fn items(&self) -> &[Pizza] {
        &self.items
    }

    /// Sum of the current prices of every item.
    pub fn total(&self, store: &Store) -> Money {
        self.items.iter().map(|item| item.price(store)).sum()
    }

    /// Marks the order completed. Further `add_item` calls are rejected.
    pub fn complete(&mut self) {
        self.is_completed = true;
    }

    /// Whether the order has been completed.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Whether the order has no items yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Short display label, `Order #ab12`: the first four hex digits of
    /// the id.
    pub fn label(&self) -> String {
        let hex = self.id.simple().to_string();
        format!("Order #{}", &hex[..4])
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

    fn store_with_basics() -> Store {
        let mut store = Store::new();
        store
            .add_dough("Classic", Money::from_cents(150), true)
            .unwrap();
        store
            .add_recipe("Margherita", Money::from_cents(800))
            .unwrap();
        store
            .add_recipe("Diavola", Money::from_cents(750))
            .unwrap();
        store
    }

    fn pizza(store: &Store, recipe_idx: usize, size: PizzaSize) -> Pizza {
        Pizza::from_recipe(&store.recipes()[recipe_idx], size, &store.doughs()[0])
    }

    #[test]
    fn test_new_order_validates_name() {
        assert!(Order::new("Ada").is_ok());
        assert!(Order::new("").is_err());
        assert!(Order::new("   ").is_err());
    }

    #[test]
    fn test_total_sums_item_prices() {
        let store = store_with_basics();
        let mut order = Order::new("Ada").unwrap();
        assert!(order.total(&store).is_zero());

        // 8.00 × 1.4 + 1.50 = 12.70
        order.add_item(pizza(&store, 0, PizzaSize::Large)).unwrap();
        // 7.50 × 1.0 + 1.50 = 9.00
        order.add_item(pizza(&store, 1, PizzaSize::Small)).unwrap();

        assert_eq!(order.total(&store).cents(), 2170);
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn test_total_tracks_catalog_edits() {
        let mut store = store_with_basics();
        let mut order = Order::new("Ada").unwrap();
        order.add_item(pizza(&store, 0, PizzaSize::Small)).unwrap();
        assert_eq!(order.total(&store).cents(), 950);

        // raising the dough price raises the already-taken order's total
        store.dough_at_mut(0).unwrap().set_price(Money::from_cents(250));
        assert_eq!(order.total(&store).cents(), 1050);
    }

    #[test]
    fn test_completed_order_rejects_items() {
        let store = store_with_basics();
        let mut order = Order::new("Ada").unwrap();
        order.add_item(pizza(&store, 0, PizzaSize::Small)).unwrap();

        order.complete();
        assert!(order.is_completed());

        let err = order.add_item(pizza(&store, 1, PizzaSize::Small)).unwrap_err();
        assert!(matches!(err, CoreError::OrderCompleted { .. }));
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn test_label_shape() {
        let order = Order::new("Ada").unwrap();
        let label = order.label();
        assert!(label.starts_with("Order #"));
        assert_eq!(label.len(), "Order #".len() + 4);
    }
}
