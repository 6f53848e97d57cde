//! contact-book binary

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use contact_book::cli::{Cli, CliError, run};
use tracing::Level;

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose).context("Failed to set up logging")?;

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(CliError::Rejected(message)) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
