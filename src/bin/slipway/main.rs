//! Slipway CLI - recipe-driven packaging for native libraries

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Check(args) => commands::check::execute(&cli.manifest_dir, args),
        Commands::Build(args) => commands::build::execute(&cli.manifest_dir, args),
        Commands::Package(args) => commands::package::execute(&cli.manifest_dir, args),
        Commands::Info(args) => commands::info::execute(&cli.manifest_dir, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
