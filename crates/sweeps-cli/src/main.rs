//! Sweeps CLI - hyperparameter sweep launching, validation, and merging.
//!
//! This binary fronts the sweep tooling: it registers sweeps with the
//! tracking service, validates sweep specs against run configs, and merges
//! trial overrides into configs.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sweeps_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("sweeps=info".parse()?)
                .add_directive("sweeps_core=info".parse()?)
                .add_directive("sweeps_wandb=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Agent(cmd) => cmd.run()?,
        Commands::Check(cmd) => cmd.run()?,
        Commands::Merge(cmd) => cmd.run()?,
    }

    Ok(())
}
