//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// country-density - rank countries by population density
#[derive(Parser)]
#[command(name = "country-density")]
#[command(version)]
#[command(about = "Rank countries by population density and audit every query", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the most densely populated countries
    ///
    /// The query is written to the request log like an HTTP query.
    Top {
        /// How many countries to return; zero or negative returns none
        #[arg(allow_hyphen_values = true)]
        count: i64,

        /// Username recorded in the request log
        #[arg(long, short = 'u')]
        user: Option<String>,
    },

    /// List every request log entry, oldest first
    Logs,

    /// Echo the given text back
    Echo {
        text: Option<String>,
    },

    /// Generate a sample configuration file
    GenerateConfig {
        /// Output path (default: config.toml)
        output_path: Option<String>,
    },
}
