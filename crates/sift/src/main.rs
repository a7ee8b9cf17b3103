mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries answers
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            corpus,
            query,
            sentences,
            json,
        } => commands::ask::run(&corpus, query.as_deref(), sentences, json),
        Commands::Files { corpus, query } => commands::files::run(&corpus, &query),
        Commands::Version => commands::version::run(),
    }
}
