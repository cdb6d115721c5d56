//! Shipsheet entry point.
//!
//! Loads the compendium and hands stdin/stdout to the fitting shell.
//! Set `SHIPSHEET_DATA` to load catalog files from another directory.

mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use compendium::Compendium;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let compendium = match std::env::var_os("SHIPSHEET_DATA") {
        Some(dir) => Compendium::load(&PathBuf::from(dir))?,
        None => Compendium::load_default()?,
    };
    tracing::debug!(
        weapons = compendium.weapons().count(),
        systems = compendium.systems().count(),
        ships = compendium.ships().count(),
        crafts = compendium.crafts().count(),
        "Compendium loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), compendium);
    shell.run()
}
