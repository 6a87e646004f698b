//! Konspekt CLI - Command-line interface for the transcript analysis pipeline.

use clap::Parser;
use konspekt_cli::commands;
use konspekt_cli::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> konspekt_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => commands::execute_run(args).await,
    }
}
