//! # Menu Tree
//!
//! The interactive menu loops, one module per domain area.
//!
//! ## Menu Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Main menu                                                          │
//! │  ├── 1. Ingredients   add / list / delete / change price            │
//! │  ├── 2. Dough types   add (classic?) / list / delete / change price │
//! │  ├── 3. Recipes       add / list / delete                           │
//! │  ├── 4. Create order  customer → pizzas (menu or custom) → file     │
//! │  ├── 5. List orders   all by total desc, or filter by customer      │
//! │  └── 0. Quit          discards everything                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every flow follows the same contract: preconditions are reported before
//! the first prompt, a failed parse or out-of-range selection is reported
//! and aborts the operation with the store unchanged, and out-of-range
//! DELETES are silent no-ops. There is no retry loop anywhere; the
//! surrounding menu simply renders again.

pub mod doughs;
pub mod ingredients;
pub mod orders;
pub mod recipes;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use forno_core::{CoreError, Store};

use crate::config::TerminalConfig;
use crate::prompt::Prompt;

/// Runs the main menu until the user quits or the stream fails.
pub fn run<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    store: &mut Store,
    config: &TerminalConfig,
) -> io::Result<()> {
    loop {
        prompt.say("")?;
        if config.show_banner {
            prompt.say("=== FORNO PIZZERIA ===")?;
        }
        prompt.say("1. Manage ingredients")?;
        prompt.say("2. Manage dough types")?;
        prompt.say("3. Manage the menu (recipes)")?;
        prompt.say("4. CREATE AN ORDER")?;
        prompt.say("5. List orders")?;
        prompt.say("0. Quit")?;

        let choice = prompt.ask("Choice: ")?;
        debug!(choice = %choice, "main menu");
        match choice.as_str() {
            "1" => ingredients::run(prompt, store, config)?,
            "2" => doughs::run(prompt, store, config)?,
            "3" => recipes::run(prompt, store, config)?,
            "4" => orders::compose(prompt, store, config)?,
            "5" => orders::listing(prompt, store, config)?,
            "0" => return Ok(()),
            _ => prompt.say("Invalid choice")?,
        }
    }
}

/// Reports a recoverable failure: one printed line, one log event, and the
/// current operation is over.
pub(crate) fn report<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    err: &CoreError,
) -> io::Result<()> {
    warn!(error = %err, "operation aborted");
    prompt.say(&format!("Error: {err}"))
}
