//! unitconv - convert amounts between units and look up constants
//!
//! Usage:
//! ```bash
//! unitconv convert 10 m ft
//! unitconv units length
//! unitconv constant pi
//! unitconv --no-history convert -40 C F
//! ```

mod commands;
mod config;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unitconv::{Error, HistoryLog, Unitconv};

use config::{Cli, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_cli(&cli);
    debug!(?config, "resolved configuration");

    let uc = match load(&config) {
        Ok(uc) => uc,
        Err(e) => {
            report(&e);
            return ExitCode::from(2);
        }
    };

    match commands::run(&uc, &cli.command, config.precision) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::from(if e.is_fatal() { 2 } else { 1 })
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(config: &Config) -> Result<Unitconv, Error> {
    let uc = Unitconv::load(&config.units, &config.constants)?;
    info!(
        units = uc.units().len(),
        constants = uc.constants().len(),
        "catalogs loaded"
    );

    Ok(match &config.history {
        Some(path) => uc.with_history(HistoryLog::at(path)),
        None => uc,
    })
}

fn report(e: &Error) {
    eprintln!("error[{}]: {}", e.code(), e);
}
