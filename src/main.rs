//! Phonebook - Main entry point
//!
//! Runs the address book REPL on stdin/stdout until `exit`, `close`, or end
//! of input.

use anyhow::Result;
use phonebook::{run_repl, CommandDispatcher, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the REPL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut dispatcher = CommandDispatcher::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_repl(&mut dispatcher, stdin.lock(), stdout.lock(), &config.prompt) {
        error!("REPL terminated with error: {}", e);
        return Err(e);
    }

    info!(
        contacts = dispatcher.book().len(),
        "Phonebook shutdown complete"
    );
    Ok(())
}
