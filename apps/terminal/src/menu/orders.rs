//! Order flows: composing a new order and listing existing ones.
//!
//! ## Composition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  precondition: at least one dough exists (reported before prompts)  │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  customer name ──► repeat:                                          │
//! │                      1. menu pizza:   size → dough → recipe         │
//! │                      2. custom pizza: size → dough → ingredients    │
//! │                      0. finish ──► complete + file the order        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed parse or an out-of-range selection aborts the pizza being
//! composed; the order itself survives and the flow menu shows again.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use forno_core::validation::parse_selection;
use forno_core::{Ingredient, Order, Pizza, PizzaSize, Store};

use super::report;
use crate::config::TerminalConfig;
use crate::prompt::Prompt;

/// Composes a new order interactively and files it in the store.
pub fn compose<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &mut Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    // every pizza needs a dough; refuse before the first prompt
    if let Err(err) = store.ensure_dough_available() {
        return report(prompt, &err);
    }

    let customer = prompt.ask("Customer name: ")?;
    let mut order = match Order::new(&customer) {
        Ok(order) => order,
        Err(err) => return report(prompt, &err.into()),
    };

    loop {
        prompt.say("")?;
        prompt.say(&format!(
            "Order: {} | Total: {}",
            order.customer_name,
            config.format_amount(order.total(store))
        ))?;
        prompt.say("1. Add a PIZZA FROM THE MENU")?;
        prompt.say("2. Add a CUSTOM PIZZA")?;
        prompt.say("0. Finish the order")?;

        let choice = prompt.ask(">> ")?;
        match choice.as_str() {
            "0" => break,
            "1" | "2" => {}
            _ => {
                prompt.say("Invalid choice")?;
                continue;
            }
        }

        // mode preconditions, also reported before any further prompt
        let precondition = if choice == "1" {
            store.ensure_recipes_available()
        } else {
            store.ensure_ingredients_available()
        };
        if let Err(err) = precondition {
            report(prompt, &err)?;
            continue;
        }

        prompt.say("Size: 1.Small 2.Medium 3.Large")?;
        let size = match prompt.ask(">> ")?.as_str() {
            "3" => PizzaSize::Large,
            "2" => PizzaSize::Medium,
            // anything else falls back to the default size
            _ => PizzaSize::default(),
        };

        prompt.say("Choose a dough:")?;
        for (pos, dough) in store.doughs().iter().enumerate() {
            prompt.say(&format!(
                "{}. {} (+{})",
                pos + 1,
                dough.name,
                config.format_amount(dough.price())
            ))?;
        }
        let Some(dough_pos) = select(prompt, "Number >> ", store.doughs().len())? else {
            continue;
        };

        let pizza = if choice == "1" {
            for (pos, recipe) in store.recipes().iter().enumerate() {
                prompt.say(&format!(
                    "{}. {} - {}",
                    pos + 1,
                    recipe.name,
                    config.format_amount(recipe.base_price())
                ))?;
            }
            let Some(recipe_pos) = select(prompt, "Pizza number >> ", store.recipes().len())?
            else {
                continue;
            };
            Pizza::from_recipe(&store.recipes()[recipe_pos], size, &store.doughs()[dough_pos])
        } else {
            let Some(picks) = pick_ingredients(prompt, store, config)? else {
                continue;
            };
            let chosen: Vec<&Ingredient> =
                picks.iter().map(|&pos| &store.ingredients()[pos]).collect();
            match Pizza::from_ingredients(size, &store.doughs()[dough_pos], &chosen) {
                Ok(pizza) => pizza,
                Err(err) => {
                    report(prompt, &err.into())?;
                    continue;
                }
            }
        };

        match order.add_item(pizza) {
            Ok(()) => prompt.say(if choice == "1" {
                "Pizza added!"
            } else {
                "Custom pizza added!"
            })?,
            Err(err) => report(prompt, &err)?,
        }
    }

    order.complete();
    debug!(order = %order.label(), items = order.items().len(), "order filed");
    store.add_order(order);
    prompt.say("Order placed!")
}

/// The repeated ingredient picker: `0` stops, a bad or out-of-range entry
/// aborts the pizza. Returns pick positions into the ingredient registry.
fn pick_ingredients<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &Store,
    config: &TerminalConfig,
) -> io::Result<Option<Vec<usize>>> {
    let mut picks = Vec::new();

    loop {
        prompt.say("Add an ingredient (0 to stop):")?;
        for (pos, ingredient) in store.ingredients().iter().enumerate() {
            prompt.say(&format!(
                "{}. {} ({})",
                pos + 1,
                ingredient.name,
                config.format_amount(ingredient.price())
            ))?;
        }

        let raw = prompt.ask(">> ")?;
        let number = match parse_selection(&raw) {
            Ok(number) => number,
            Err(err) => {
                report(prompt, &err.into())?;
                return Ok(None);
            }
        };

        if number == 0 {
            return Ok(Some(picks));
        }
        if number > store.ingredients().len() {
            warn!(number, "ingredient selection out of range");
            prompt.say("Invalid selection.")?;
            return Ok(None);
        }

        picks.push(number - 1);
        prompt.say(&format!("+ {}", store.ingredients()[number - 1].name))?;
    }
}

/// Asks for a 1-based selection into a listing of `len` entries.
/// `Ok(None)` means the entry was invalid and has already been reported.
fn select<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    question: &str,
    len: usize,
) -> io::Result<Option<usize>> {
    let raw = prompt.ask(question)?;
    let number = match parse_selection(&raw) {
        Ok(number) => number,
        Err(err) => {
            report(prompt, &err.into())?;
            return Ok(None);
        }
    };

    match number.checked_sub(1).filter(|pos| *pos < len) {
        Some(pos) => Ok(Some(pos)),
        None => {
            warn!(number, "selection out of range");
            prompt.say("Invalid selection.")?;
            Ok(None)
        }
    }
}

/// Lists orders: all of them by descending total, filtered by customer, or
/// dumped as JSON.
pub fn listing<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    prompt.say("")?;
    prompt.say("1. Show all (by total, descending)")?;
    prompt.say("2. Find orders by customer name")?;
    prompt.say("3. Export all as JSON")?;

    let choice = prompt.ask(">> ")?;
    let selected: Vec<&Order> = match choice.as_str() {
        "1" => store.orders_by_total_desc(),
        "2" => {
            let query = prompt.ask("Customer name: ")?;
            store.orders_for_customer(&query)
        }
        "3" => return export(prompt, store),
        _ => return prompt.say("Invalid choice"),
    };

    for order in selected {
        prompt.say("")?;
        prompt.say(&format!(
            "[{}] {} - Total: {}",
            order.label(),
            order.customer_name,
            config.format_amount(order.total(store))
        ))?;
        prompt.say(&format!(
            "Placed: {}",
            order.created_at.format("%Y-%m-%d %H:%M:%S")
        ))?;

        for pizza in order.items() {
            let mut description = pizza.name.clone();
            if let Some(list) = pizza.ingredient_list() {
                description.push_str(&format!(" (ingredients: {list})"));
            }
            prompt.say(&format!(
                "  - {} [{}, {}] = {}",
                description,
                pizza.size,
                pizza.dough_name(),
                config.format_amount(pizza.price(store))
            ))?;
        }
    }
    Ok(())
}

/// Dumps the whole order registry as pretty-printed JSON, in insertion
/// order. Prices are not embedded: they are derived, never stored.
fn export<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, store: &Store) -> io::Result<()> {
    match serde_json::to_string_pretty(store.orders()) {
        Ok(json) => prompt.say(&json),
        Err(err) => {
            warn!(error = %err, "order export failed");
            prompt.say("Error: export failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forno_core::Money;

    fn seeded_store() -> Store {
        let mut store = Store::new();
        store.add_dough("Classic", Money::from_cents(150), true).unwrap();
        store.add_recipe("Margherita", Money::from_cents(800)).unwrap();
        store.add_ingredient("Mozzarella", Money::from_cents(200)).unwrap();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        store
    }

    fn drive_compose(input: &str, store: &mut Store) -> String {
        let mut prompt = Prompt::new(input.as_bytes(), Vec::new());
        compose(&mut prompt, store, &TerminalConfig::default()).unwrap();
        String::from_utf8(prompt.into_writer()).unwrap()
    }

    #[test]
    fn test_compose_menu_pizza() {
        let mut store = seeded_store();
        let out = drive_compose("Ada\n1\n3\n1\n1\n0\n", &mut store);

        assert!(out.contains("Pizza added!"));
        assert!(out.contains("Order placed!"));
        // 8.00 × 1.4 + 1.50, visible in the flow header after adding
        assert!(out.contains("Total: 12.70 €"));

        assert_eq!(store.orders().len(), 1);
        let order = &store.orders()[0];
        assert!(order.is_completed());
        assert_eq!(order.total(&store).cents(), 1270);
    }

    #[test]
    fn test_compose_custom_pizza() {
        let mut store = seeded_store();
        let out = drive_compose("Bob\n2\n2\n1\n1\n2\n0\n0\n", &mut store);

        assert!(out.contains("+ Mozzarella"));
        assert!(out.contains("+ Ham"));
        assert!(out.contains("Custom pizza added!"));
        // (2.00 + 3.00) × 1.2 + 1.50 = 7.50
        assert_eq!(store.orders()[0].total(&store).cents(), 750);
    }

    #[test]
    fn test_compose_refused_without_dough() {
        let mut store = Store::new();
        let out = drive_compose("", &mut store);

        // reported before any prompt: no "Customer name" question was asked
        assert!(out.contains("no dough types exist yet"));
        assert!(!out.contains("Customer name"));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_custom_pizza_needs_ingredients() {
        let mut store = seeded_store();
        let out = drive_compose("Cat\n2\n1\n1\n0\n0\n", &mut store);

        assert!(out.contains("at least one ingredient"));
        // the order itself was still filed, just without that pizza
        assert!(store.orders()[0].is_empty());
    }

    #[test]
    fn test_bad_dough_selection_aborts_the_pizza() {
        let mut store = seeded_store();
        let out = drive_compose("Dan\n1\n1\n9\n0\n", &mut store);

        assert!(out.contains("Invalid selection."));
        assert!(store.orders()[0].is_empty());
    }

    fn drive_listing(input: &str, store: &Store) -> String {
        let mut prompt = Prompt::new(input.as_bytes(), Vec::new());
        listing(&mut prompt, store, &TerminalConfig::default()).unwrap();
        String::from_utf8(prompt.into_writer()).unwrap()
    }

    fn file_order(store: &mut Store, customer: &str, size: PizzaSize) {
        let pizza = Pizza::from_recipe(&store.recipes()[0], size, &store.doughs()[0]);
        let mut order = Order::new(customer).unwrap();
        order.add_item(pizza).unwrap();
        order.complete();
        store.add_order(order);
    }

    #[test]
    fn test_listing_descends_by_total() {
        let mut store = seeded_store();
        file_order(&mut store, "Cheap", PizzaSize::Small); // 9.50
        file_order(&mut store, "Pricey", PizzaSize::Large); // 12.70

        let out = drive_listing("1\n", &store);
        let pricey = out.find("Pricey").unwrap();
        let cheap = out.find("Cheap").unwrap();
        assert!(pricey < cheap);
        assert!(out.contains("Total: 12.70 €"));
        assert!(out.contains("Margherita [Large, Classic] = 12.70 €"));
    }

    #[test]
    fn test_listing_export_is_json() {
        let mut store = seeded_store();
        file_order(&mut store, "Ada", PizzaSize::Large);

        let out = drive_listing("3\n", &store);
        assert!(out.contains("\"customer_name\": \"Ada\""));
        assert!(out.contains("\"size\": \"large\""));
    }

    #[test]
    fn test_listing_filters_by_customer() {
        let mut store = seeded_store();
        file_order(&mut store, "Alexandra", PizzaSize::Small);
        file_order(&mut store, "Bob", PizzaSize::Small);

        let out = drive_listing("2\nalex\n", &store);
        assert!(out.contains("Alexandra"));
        assert!(!out.contains("Bob"));
    }
}
