//! Ingredient registry menu: add, list, delete, change price.

use std::io::{self, BufRead, Write};

use tracing::debug;

use forno_core::validation::{parse_amount, parse_selection};
use forno_core::Store;

use super::report;
use crate::config::TerminalConfig;
use crate::prompt::Prompt;

pub fn run<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &mut Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    loop {
        prompt.say("")?;
        prompt.say("--- Ingredients ---")?;
        prompt.say("1. Add")?;
        prompt.say("2. List")?;
        prompt.say("3. Delete")?;
        prompt.say("4. Change price")?;
        prompt.say("0. Back")?;

        let choice = prompt.ask(">> ")?;
        match choice.as_str() {
            "0" => return Ok(()),
            "1" => add(prompt, store)?,
            "2" => list(prompt, store, config)?,
            "3" => delete(prompt, store, config)?,
            "4" => change_price(prompt, store, config)?,
            _ => prompt.say("Invalid choice")?,
        }
    }
}

fn add<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, store: &mut Store) -> io::Result<()> {
    let name = prompt.ask("Name: ")?;
    let raw_price = prompt.ask("Price: ")?;

    let price = match parse_amount("price", &raw_price) {
        Ok(price) => price,
        Err(err) => return report(prompt, &err.into()),
    };

    match store.add_ingredient(&name, price) {
        Ok(ingredient) => {
            debug!(name = %ingredient.name, price = %ingredient.price(), "ingredient added");
            prompt.say("Saved.")
        }
        Err(err) => report(prompt, &err),
    }
}

fn list<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    for (pos, ingredient) in store.ingredients().iter().enumerate() {
        prompt.say(&format!(
            "{}. {} - {}",
            pos + 1,
            ingredient.name,
            config.format_amount(ingredient.price())
        ))?;
    }
    Ok(())
}

fn delete<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &mut Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    list(prompt, store, config)?;

    let raw = prompt.ask("Number to delete: ")?;
    let number = match parse_selection(&raw) {
        Ok(number) => number,
        Err(err) => return report(prompt, &err.into()),
    };

    // an out-of-range delete is a silent no-op, uniformly across registries
    if let Some(removed) = number
        .checked_sub(1)
        .and_then(|pos| store.remove_ingredient_at(pos))
    {
        debug!(name = %removed.name, "ingredient removed");
        prompt.say("Removed.")?;
    }
    Ok(())
}

fn change_price<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &mut Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    list(prompt, store, config)?;

    let raw = prompt.ask("Number: ")?;
    let number = match parse_selection(&raw) {
        Ok(number) => number,
        Err(err) => return report(prompt, &err.into()),
    };

    let Some(pos) = number.checked_sub(1).filter(|p| *p < store.ingredients().len()) else {
        return prompt.say("No such ingredient.");
    };

    let raw_price = prompt.ask("New price: ")?;
    let price = match parse_amount("price", &raw_price) {
        Ok(price) => price,
        Err(err) => return report(prompt, &err.into()),
    };

    if let Some(ingredient) = store.ingredient_at_mut(pos) {
        ingredient.set_price(price);
        debug!(name = %ingredient.name, price = %ingredient.price(), "ingredient price changed");
        prompt.say("Updated.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forno_core::Money;

    fn drive(input: &str, store: &mut Store) -> String {
        let mut prompt = Prompt::new(input.as_bytes(), Vec::new());
        run(&mut prompt, store, &TerminalConfig::default()).unwrap();
        String::from_utf8(prompt.into_writer()).unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let mut store = Store::new();
        let out = drive("1\nMozzarella\n2.50\n2\n0\n", &mut store);

        assert_eq!(store.ingredients().len(), 1);
        assert!(out.contains("Saved."));
        assert!(out.contains("1. Mozzarella - 2.50 €"));
    }

    #[test]
    fn test_bad_price_aborts_without_mutation() {
        let mut store = Store::new();
        let out = drive("1\nHam\nabc\n0\n", &mut store);

        assert!(store.ingredients().is_empty());
        assert!(out.contains("not a valid amount"));
    }

    #[test]
    fn test_negative_price_aborts_without_mutation() {
        let mut store = Store::new();
        let out = drive("1\nHam\n-3\n0\n", &mut store);

        assert!(store.ingredients().is_empty());
        assert!(out.contains("must not be negative"));
    }

    #[test]
    fn test_delete_in_range_reports_removed() {
        let mut store = Store::new();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        let out = drive("3\n1\n0\n", &mut store);

        assert!(store.ingredients().is_empty());
        assert!(out.contains("Removed."));
    }

    #[test]
    fn test_delete_out_of_range_is_silent() {
        let mut store = Store::new();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        let out = drive("3\n7\n0\n", &mut store);

        assert_eq!(store.ingredients().len(), 1);
        assert!(!out.contains("Removed."));
        assert!(!out.contains("Error"));
    }

    #[test]
    fn test_change_price_propagates_to_store() {
        let mut store = Store::new();
        store.add_ingredient("Ham", Money::from_cents(300)).unwrap();
        let out = drive("4\n1\n4.50\n0\n", &mut store);

        assert_eq!(store.ingredients()[0].price().cents(), 450);
        assert!(out.contains("Updated."));
    }
}
