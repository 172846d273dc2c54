mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("templatefinder=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> miette::Result<()> {
    init_tracing();

    match Cli::parse().command {
        Commands::List { pattern, config } => commands::list::run(pattern, config),
        Commands::Choices { pattern, config } => commands::choices::run(pattern, config),
        Commands::Loaders { config } => commands::loaders::run(config),
    }
}
