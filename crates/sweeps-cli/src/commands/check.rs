//! Check Command Implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use sweeps_core::{check_config_sweep, RunConfig};

/// Validate a run config's sweep parameters
///
/// Loads a run config and checks that every parameter its embedded sweep
/// declares exists either at the top level or inside `arch_config`. A
/// config without a sweep passes trivially. Exits nonzero naming the first
/// offending key.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Path to the run config file (JSON or YAML)
    #[arg(long, short = 'c')]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Execute the check command
    pub fn run(&self) -> Result<()> {
        let config = RunConfig::from_file(&self.config)
            .with_context(|| format!("Failed to load config {}", self.config.display()))?;
        check_config_sweep(&config)
            .with_context(|| format!("Sweep validation failed for {}", self.config.display()))?;
        println!("{}: sweep parameters ok", self.config.display());
        Ok(())
    }
}
