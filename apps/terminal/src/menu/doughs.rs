//! Dough registry menu: add (with the classic flag), list, delete,
//! change price.
//!
//! Adding is the interesting branch: the store may reject the dough when a
//! classic exists and the new price is above 1.2× the classic's price. The
//! rejection is reported like any validation failure and nothing changes.

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
        prompt.say("--- Dough types ---")?;
        prompt.say("1. Add a dough type")?;
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
    let raw_price = prompt.ask("Surcharge price: ")?;

    let price = match parse_amount("price", &raw_price) {
        Ok(price) => price,
        Err(err) => return report(prompt, &err.into()),
    };

    let answer = prompt.ask("Classic dough? (y/n): ")?;
    let is_classic = matches!(answer.to_lowercase().as_str(), "y" | "yes");

    match store.add_dough(&name, price, is_classic) {
        Ok(dough) => {
            debug!(name = %dough.name, classic = dough.is_classic(), "dough added");
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
    for (pos, dough) in store.doughs().iter().enumerate() {
        let marker = if dough.is_classic() { " (classic)" } else { "" };
        prompt.say(&format!(
            "{}. {}{} - {}",
            pos + 1,
            dough.name,
            marker,
            config.format_amount(dough.price())
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
        .and_then(|pos| store.remove_dough_at(pos))
    {
        debug!(name = %removed.name, "dough removed");
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

    let Some(pos) = number.checked_sub(1).filter(|p| *p < store.doughs().len()) else {
        return prompt.say("No such dough type.");
    };

    let raw_price = prompt.ask("New price: ")?;
    let price = match parse_amount("price", &raw_price) {
        Ok(price) => price,
        Err(err) => return report(prompt, &err.into()),
    };

    if let Some(dough) = store.dough_at_mut(pos) {
        dough.set_price(price);
        debug!(name = %dough.name, price = %dough.price(), "dough price changed");
        prompt.say("Updated.")?;
    }
    Ok(())
}
