use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the JSON output; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => commands::show::run(args).await,
        Commands::Provider(args) => commands::provider::run(args),
        Commands::Perf(args) => commands::perf::run(args),
        Commands::Completion(args) => commands::completion::run(args),
    }
}
