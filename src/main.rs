mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pom_calendar::{write_calendar, AlmanacEphemeris, ConfigFile};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<ConfigFile> {
    let file = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "reading config");
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            ConfigFile::from_toml_str(&text)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ConfigFile::default(),
    };
    Ok(cli.overlay(file))
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?
        .resolve()
        .context("invalid calendar configuration")?;

    // Records are buffered so a failed run leaves stdout empty.
    let mut records = Vec::new();
    let mut diag = io::stderr().lock();
    write_calendar(&AlmanacEphemeris, &config, &mut records, &mut diag)
        .with_context(|| format!("failed to build calendar for {}", config.year))?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&records)
        .and_then(|()| stdout.flush())
        .context("failed to write calendar")?;
    Ok(())
}
