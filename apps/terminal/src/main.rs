//! # Forno Terminal
//!
//! The interactive text-menu front end over `forno-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Terminal Front End                             │
//! │                                                                     │
//! │  stdin ───► Prompt ───► menu flows ───► forno-core ───► stdout      │
//! │                                                                     │
//! │  Single sequential control flow: one operation completes before     │
//! │  the next begins. The only suspension point is the input prompt.    │
//! │  All state is in-memory and discarded on exit.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod menu;
mod prompt;

use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use forno_core::Store;

use crate::config::TerminalConfig;
use crate::error::AppError;
use crate::prompt::Prompt;

fn main() {
    // Initialize tracing; FORNO's log level rides on RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // No failure escapes as a panic: log it, then exit non-zero
    if let Err(err) = run() {
        error!(error = %err, "fatal failure, shutting down");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    info!("starting forno terminal");

    let config = TerminalConfig::load()?;
    info!(currency = %config.currency, "configuration loaded");

    // All state lives here and dies with the process
    let mut store = Store::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompt::new(stdin.lock(), stdout.lock());

    menu::run(&mut prompt, &mut store, &config)?;

    info!("session ended, state discarded");
    Ok(())
}
