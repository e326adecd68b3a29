use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use walletrate_core::config::{CliOverrides, WalletRateConfig};
use walletrate_core::{Variant, WalletDocument};
use walletrate_engine::loader::load_catalog;
use walletrate_engine::reporters::console::ConsoleReporter;
use walletrate_engine::reporters::create_reporter;
use walletrate_engine::{default_tree, describe, Aggregator, RatedWallet};

use crate::cli::{Cli, Commands};

/// Run the parsed command and return what should be printed to stdout.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Rate { catalog, variant } => {
            let config = load_config(cli, catalog.as_deref())?;
            let aggregator = aggregator(&config)?;
            let wallets = load(&config.catalog.effective_path(), &config)?;
            let rated = match variant {
                Some(v) => aggregator.rate_catalog_variant(&wallets, *v)?,
                None => aggregator.rate_catalog(&wallets)?,
            };
            let reporter = create_reporter(
                config.report.effective_format(),
                config.report.effective_color(),
            )?;
            Ok(reporter.generate(&rated)?)
        }
        Commands::Show {
            catalog,
            wallet,
            variant,
        } => {
            let config = load_config(cli, Some(catalog.as_path()))?;
            let aggregator = aggregator(&config)?;
            let wallets = load(catalog, &config)?;
            let Some(doc) = wallets.iter().find(|w| w.id() == wallet.as_str()) else {
                bail!("No wallet with id {wallet:?} in {}", catalog.display());
            };
            let rated = rate_variants(&aggregator, doc, *variant)?;
            let color = config.report.effective_color();
            if config.report.effective_format() == "json" {
                return Ok(create_reporter("json", color)?.generate(&rated)?);
            }
            let console = ConsoleReporter::new(color);
            Ok(rated
                .iter()
                .map(|r| console.detail(r))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Commands::Schema => {
            let config = load_config(cli, None)?;
            let tree = default_tree()?;
            let schema = describe(&tree);
            if config.report.effective_format() == "json" {
                return Ok(serde_json::to_string_pretty(&schema)?);
            }
            let mut out = String::new();
            for group in &schema {
                out.push_str(&format!("{} ({})\n", group.display_name, group.id));
                if !group.exempt_variants.is_empty() {
                    out.push_str(&format!("  not rated for: {}\n", join_variants(group.exempt_variants)));
                }
                for attr in &group.attributes {
                    out.push_str(&format!("  {} ({}): {}\n", attr.display_name, attr.id, attr.question));
                    if !attr.exempt_variants.is_empty() {
                        out.push_str(&format!("    not rated for: {}\n", join_variants(attr.exempt_variants)));
                    }
                }
            }
            Ok(out)
        }
    }
}

fn load_config(cli: &Cli, catalog: Option<&Path>) -> Result<WalletRateConfig> {
    let overrides = CliOverrides {
        catalog_path: catalog.map(Path::to_path_buf),
        report_format: cli.format.map(|f| f.name().to_string()),
        report_color: cli.no_color.then_some(false),
    };
    let config = match &cli.config {
        Some(path) => WalletRateConfig::load_file(path, Some(&overrides))?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            WalletRateConfig::load(&cwd, Some(&overrides))?
        }
    };
    Ok(config)
}

fn aggregator(config: &WalletRateConfig) -> Result<Aggregator> {
    let tree = Arc::new(default_tree()?);
    Ok(Aggregator::new(tree, config.scoring.clone()))
}

fn load(dir: &Path, config: &WalletRateConfig) -> Result<Vec<WalletDocument>> {
    let wallets = load_catalog(dir, &config.catalog.effective_extensions())?;
    if wallets.is_empty() {
        tracing::warn!(dir = %dir.display(), "catalog contains no wallet documents");
    }
    Ok(wallets)
}

fn rate_variants(
    aggregator: &Aggregator,
    doc: &WalletDocument,
    variant: Option<Variant>,
) -> Result<Vec<RatedWallet>> {
    Ok(match variant {
        Some(v) => vec![aggregator.rate_wallet(doc, v)?],
        None => aggregator.rate_all_variants(doc)?,
    })
}

fn join_variants(variants: &[Variant]) -> String {
    variants
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}
