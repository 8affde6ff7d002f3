//! Teller CLI - interactive banking ledger from the console.
//!
//! ```bash
//! teller
//! teller --dump reports/ledger.txt
//! teller --seed 42            # reproducible id sequence
//! ```

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use teller_core::{Config, Ledger};

mod input;
mod menu;

use menu::Console;

/// Teller - an in-memory, menu-driven banking ledger
#[derive(Parser)]
#[command(name = "teller")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File the ledger dump is written to
    #[arg(long, default_value = "ledger_dump.txt")]
    dump: PathBuf,

    /// Seed the id generator for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Log to stderr; stdout belongs to the menu.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = Config::default();
    let mut ledger = match cli.seed {
        Some(seed) => Ledger::with_seed(config, seed),
        None => Ledger::new(config),
    };
    tracing::info!(seed = ?cli.seed, dump = %cli.dump.display(), "ledger session starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run(&mut ledger, &cli.dump)
}
