//! Halakha CLI - Build labeled train/test sets from halakhic corpora.

use anyhow::Context;
use clap::Parser;
use halakha_cli::commands;
use halakha_cli::{Cli, Command, Formatter, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout carries only the report)
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let format: OutputFormat = cli.format.map(Into::into).unwrap_or_default();
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Build(args) => {
            commands::execute_build(args, &formatter).context("build failed")?;
        }
        Command::Clean(args) => {
            commands::execute_clean(args, &formatter).context("clean failed")?;
        }
    }

    Ok(())
}
