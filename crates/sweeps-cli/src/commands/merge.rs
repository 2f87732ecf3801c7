//! Merge Command Implementation

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;
use sweeps_core::{update_run_config, RunConfig};

/// Merge override values into a run config
///
/// Each `--set key=value` replaces the matching top-level hyperparameter
/// or, failing that, the matching key inside `arch_config`. Values parse as
/// JSON, falling back to a plain string. Unknown keys warn and are skipped.
/// The merged config is printed as pretty JSON, or written with `--output`.
#[derive(Args, Debug, Clone)]
pub struct MergeCommand {
    /// Path to the run config file (JSON or YAML)
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Override in key=value form; repeatable
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Write the merged config to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log each applied change
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl MergeCommand {
    /// Execute the merge command
    pub fn run(&self) -> Result<()> {
        let config = RunConfig::from_file(&self.config)
            .with_context(|| format!("Failed to load config {}", self.config.display()))?;

        let mut overrides = BTreeMap::new();
        for entry in &self.set {
            let (key, value) = parse_override(entry)?;
            overrides.insert(key, value);
        }

        let merged = update_run_config(&config, &overrides, self.verbose);
        let text = serde_json::to_string_pretty(&merged)?;

        match &self.output {
            Some(output) => fs::write(output, text)
                .with_context(|| format!("Failed to write {}", output.display()))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}

/// Splits a `key=value` override, parsing the value as JSON with a
/// plain-string fallback.
fn parse_override(entry: &str) -> Result<(String, Value)> {
    let Some((key, value)) = entry.split_once('=') else {
        bail!("invalid override '{entry}' (expected key=value)");
    };
    let parsed = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), parsed))
}
