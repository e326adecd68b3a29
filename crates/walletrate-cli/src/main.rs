use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    walletrate_core::tracing_setup::init_tracing(cli.log.as_deref());
    tracing::debug!(command = ?cli.command, "starting");

    let output = commands::run(&cli)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
