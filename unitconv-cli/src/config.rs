//! Command-line arguments and resolved configuration
//!
//! Flags override environment variables; anything unset falls back to the
//! embedded tables and a history file under the user's local data dir.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use unitconv::{TableSource, DISPLAY_PRECISION};

#[derive(Debug, Parser)]
#[command(
    name = "unitconv",
    version,
    about = "Convert amounts between units and look up named constants",
    long_about = "Convert amounts between units of the same category and look up the values of \
                  scientific and mathematical constants. Category, unit and constant names are case \
                  agnostic; unit and constant symbols are matched exactly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Unit table to load instead of the embedded one
    #[arg(long, env = "UNITCONV_UNITS_FILE", global = true)]
    pub units_file: Option<PathBuf>,

    /// Constant table to load instead of the embedded one
    #[arg(long, env = "UNITCONV_CONSTANTS_FILE", global = true)]
    pub constants_file: Option<PathBuf>,

    /// Conversion history file
    #[arg(long, env = "UNITCONV_HISTORY_FILE", global = true)]
    pub history_file: Option<PathBuf>,

    /// Do not record conversions
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Decimal places for converted values
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DISPLAY_PRECISION,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=15)
    )]
    pub precision: usize,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Convert an amount, e.g. `unitconv convert 10 m ft`
    Convert {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        from: String,
        to: String,
    },
    /// List unit categories
    Categories,
    /// List the units of a category
    Units { category: String },
    /// List constant groups
    Groups,
    /// List constants, optionally only those of one group
    Constants { group: Option<String> },
    /// Show the value of a constant
    Constant { name: String },
    /// Show name, symbol, value and unit of a constant
    ConstantDetail { name: String },
    /// Show past conversions
    History,
}

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub units: TableSource,
    pub constants: TableSource,
    pub history: Option<PathBuf>,
    pub precision: usize,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let history = if cli.no_history {
            None
        } else {
            cli.history_file.clone().or_else(default_history_path)
        };
        debug!(?history, "history file");

        Config {
            units: table_source(&cli.units_file),
            constants: table_source(&cli.constants_file),
            history,
            precision: cli.precision,
        }
    }
}

fn table_source(path: &Option<PathBuf>) -> TableSource {
    path.clone().map_or(TableSource::Embedded, TableSource::File)
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("unitconv").join("history.log"))
}
