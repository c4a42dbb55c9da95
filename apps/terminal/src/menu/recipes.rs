//! Recipe registry menu: add, list, delete.
//!
//! Recipes are templates with no price setter; the only mutation after
//! creation is deletion, so this menu is the smallest of the three.

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
        prompt.say("--- Pizzeria menu ---")?;
        prompt.say("1. Create a pizza recipe")?;
        prompt.say("2. List recipes")?;
        prompt.say("3. Delete a recipe")?;
        prompt.say("0. Back")?;

        let choice = prompt.ask(">> ")?;
        match choice.as_str() {
            "0" => return Ok(()),
            "1" => add(prompt, store)?,
            "2" => list(prompt, store, config)?,
            "3" => delete(prompt, store, config)?,
            _ => prompt.say("Invalid choice")?,
        }
    }
}

fn add<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, store: &mut Store) -> io::Result<()> {
    let name = prompt.ask("Pizza name: ")?;
    let raw_price = prompt.ask("Base price: ")?;

    let base_price = match parse_amount("base price", &raw_price) {
        Ok(price) => price,
        Err(err) => return report(prompt, &err.into()),
    };

    match store.add_recipe(&name, base_price) {
        Ok(recipe) => {
            debug!(name = %recipe.name, base = %recipe.base_price(), "recipe created");
            prompt.say("Recipe created.")
        }
        Err(err) => report(prompt, &err),
    }
}

fn list<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    for (pos, recipe) in store.recipes().iter().enumerate() {
        prompt.say(&format!(
            "{}. {} (base: {})",
            pos + 1,
            recipe.name,
            config.format_amount(recipe.base_price())
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
        .and_then(|pos| store.remove_recipe_at(pos))
    {
        debug!(name = %removed.name, "recipe removed");
        prompt.say("Removed.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(input: &str, store: &mut Store) -> String {
        let mut prompt = Prompt::new(input.as_bytes(), Vec::new());
        run(&mut prompt, store, &TerminalConfig::default()).unwrap();
        String::from_utf8(prompt.into_writer()).unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let mut store = Store::new();
        let out = drive("1\nMargherita\n8\n2\n0\n", &mut store);

        assert_eq!(store.recipes().len(), 1);
        assert!(out.contains("Recipe created."));
        assert!(out.contains("1. Margherita (base: 8.00 €)"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut store = Store::new();
        let out = drive("1\n \n8\n0\n", &mut store);

        assert!(store.recipes().is_empty());
        assert!(out.contains("name is required"));
    }
}
