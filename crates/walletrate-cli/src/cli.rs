use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use walletrate_core::Variant;

#[derive(Parser, Debug)]
#[command(name = "walletrate", version, about = "Rate wallets against the attribute tree")]
pub struct Cli {
    /// Config file to use instead of ./walletrate.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `walletrate_engine=trace` (overrides WALLETRATE_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,
    /// Output format (defaults to report.format from config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// Disable ANSI colors in console output
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rate every wallet in a catalog directory and print the ranking
    Rate {
        /// Catalog directory (defaults to catalog.path from config)
        catalog: Option<PathBuf>,
        /// Rate this variant instead of each wallet's primary one
        #[arg(long, value_parser = parse_variant)]
        variant: Option<Variant>,
    },
    /// Show every attribute rating for one wallet
    Show {
        catalog: PathBuf,
        wallet: String,
        /// Only this variant (defaults to all declared variants)
        #[arg(long, value_parser = parse_variant)]
        variant: Option<Variant>,
    },
    /// Print the attribute tree: groups, attributes, questions, and scales
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
        }
    }
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse().map_err(|e: walletrate_core::errors::FeatureError| e.to_string())
}
