//! Agent Command Implementation
//!
//! Registers a sweep with the tracking service and launches (or only
//! prepares) the agent loop that runs the training script under sampled
//! configurations.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use sweeps_core::{check_config_sweep, RunConfig, SweepSpec};
use sweeps_wandb::{launch_agent, AgentOptions, WandbCliBackend};
use tracing::info;

/// Register a sweep and launch (or prepare) its agent
///
/// The sweep spec is read from a JSON or YAML file; its `program` defaults
/// to the given training script. With `--config`, the spec is first
/// validated against that run config so a sweep never tunes parameters the
/// config does not have.
///
/// # Example
///
/// ```bash
/// sweeps agent train.py \
///     --sweep sweep.yaml \
///     --entity team --project tsai \
///     --count 20
/// ```
#[derive(Args, Debug, Clone)]
pub struct AgentCommand {
    /// Training script the agent executes for each trial
    pub script: PathBuf,

    /// Path to the sweep specification file (JSON or YAML)
    #[arg(long, short = 's')]
    pub sweep: PathBuf,

    /// Run config to validate the sweep against before launching
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Entity (team or username) to register the sweep under
    #[arg(long, env = "WANDB_ENTITY")]
    pub entity: Option<String>,

    /// Project to register the sweep under
    #[arg(long, env = "WANDB_PROJECT")]
    pub project: Option<String>,

    /// Maximum number of trials for the agent loop
    #[arg(long)]
    pub count: Option<usize>,

    /// Register the sweep and print the agent command without running it
    #[arg(long, default_value_t = false)]
    pub register_only: bool,

    /// Path to the wandb executable
    #[arg(long, default_value = "wandb")]
    pub wandb_bin: PathBuf,
}

impl AgentCommand {
    /// Execute the agent command
    pub fn run(&self) -> Result<()> {
        let spec = SweepSpec::from_file(&self.sweep)
            .with_context(|| format!("Failed to load sweep spec {}", self.sweep.display()))?;

        if let Some(config_path) = &self.config {
            let mut config = RunConfig::from_file(config_path)
                .with_context(|| format!("Failed to load config {}", config_path.display()))?;
            config.sweep = Some(spec.clone());
            check_config_sweep(&config).with_context(|| {
                format!("Sweep validation failed against {}", config_path.display())
            })?;
            info!("sweep parameters validated against {}", config_path.display());
        }

        let backend = WandbCliBackend::with_program(&self.wandb_bin);
        let options = AgentOptions {
            entity: self.entity.clone(),
            project: self.project.clone(),
            count: self.count,
            run: !self.register_only,
        };
        launch_agent(&backend, &self.script, &spec, &options)
            .context("Failed to launch sweep agent")?;
        Ok(())
    }
}
