//! Sweeps CLI Library
//!
//! This crate provides the command-line interface for the sweep tooling:
//!
//! - **Agent**: register a sweep with the tracking service and launch (or
//!   only prepare) its agent loop
//! - **Check**: validate that a run config's sweep parameters all exist in
//!   the config they will tune
//! - **Merge**: merge override values into a run config and print the result
//!
//! # Example
//!
//! ```bash
//! # Register a sweep and run its agent for 20 trials
//! sweeps agent train.py --sweep sweep.yaml --entity team --project tsai --count 20
//!
//! # Validate a config that embeds a sweep
//! sweeps check --config run.json
//!
//! # Apply trial overrides to a config
//! sweeps merge --config run.json --set lr=0.01 --set depth=5
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{AgentCommand, CheckCommand, MergeCommand};

/// Sweeps - hyperparameter sweep tooling
///
/// Wraps the Weights & Biases sweep workflow: launching agents, validating
/// sweep specifications against run configs, and merging trial overrides.
#[derive(Parser, Debug)]
#[command(name = "sweeps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a sweep and launch (or prepare) its agent
    Agent(AgentCommand),

    /// Validate a run config's sweep parameters
    Check(CheckCommand),

    /// Merge override values into a run config
    Merge(MergeCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
