//! [`SweepService`] backend driving the `wandb` command-line client.
//!
//! Registration stages the spec as a temporary YAML file and invokes
//! `wandb sweep`; the sweep identifier is parsed from the client's output.
//! The agent loop is `wandb agent`, run as a blocking child process.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use once_cell::sync::Lazy;
use regex::Regex;
use sweeps_core::SweepSpec;
use tracing::debug;

use crate::error::{Result, WandbError};
use crate::service::{SweepPath, SweepService};
use crate::settings::WandbSettings;

// `wandb sweep` reports the id in a "Created sweep with ID: <id>" line and
// also echoes the full agent command; accept either.
static SWEEP_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Created sweep with ID:\s*(\S+)").expect("valid sweep id regex"));
static AGENT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"wandb agent\s+[^/\s]+/[^/\s]+/(\S+)").expect("valid agent line regex")
});

/// Extracts a sweep identifier from `wandb sweep` output.
pub(crate) fn parse_sweep_id(output: &str) -> Option<String> {
    if let Some(caps) = SWEEP_ID_RE.captures(output) {
        return Some(caps[1].to_string());
    }
    AGENT_LINE_RE
        .captures(output)
        .map(|caps| caps[1].to_string())
}

/// Drives the `wandb` executable as the sweep service.
#[derive(Debug, Clone)]
pub struct WandbCliBackend {
    program: PathBuf,
}

impl Default for WandbCliBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl WandbCliBackend {
    /// Creates a backend using `wandb` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("wandb")
    }

    /// Creates a backend using a specific client executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn capture(&self, command: &str, args: &[&str]) -> Result<Output> {
        debug!("running {} {} {}", self.program.display(), command, args.join(" "));
        Command::new(&self.program)
            .arg(command)
            .args(args)
            .output()
            .map_err(|e| self.spawn_error(e))
    }

    fn spawn_error(&self, e: std::io::Error) -> WandbError {
        if e.kind() == std::io::ErrorKind::NotFound {
            WandbError::ClientUnavailable {
                message: format!("{} not found", self.program.display()),
            }
        } else {
            WandbError::ClientUnavailable {
                message: e.to_string(),
            }
        }
    }
}

impl SweepService for WandbCliBackend {
    fn register_sweep(&self, spec: &SweepSpec, settings: &WandbSettings) -> Result<String> {
        let staging = tempfile::tempdir()?;
        let spec_path = staging.path().join("sweep.yaml");
        fs::write(&spec_path, serde_yaml::to_string(spec)?)?;

        let spec_arg = spec_path.to_string_lossy().into_owned();
        let output = self.capture(
            "sweep",
            &[
                "--entity",
                &settings.entity,
                "--project",
                &settings.project,
                &spec_arg,
            ],
        )?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(WandbError::CommandFailed {
                command: "sweep".to_string(),
                status: output.status.to_string(),
                output: combined,
            });
        }

        parse_sweep_id(&combined).ok_or(WandbError::SweepIdNotFound { output: combined })
    }

    fn run_agent(&self, path: &SweepPath, count: Option<usize>) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("agent");
        if let Some(count) = count {
            cmd.arg("--count").arg(count.to_string());
        }
        cmd.arg(path.to_string());

        // Inherit stdio so the agent's trial logs stream to the console;
        // this blocks until the loop finishes.
        let status = cmd.status().map_err(|e| self.spawn_error(e))?;
        if !status.success() {
            return Err(WandbError::CommandFailed {
                command: "agent".to_string(),
                status: status.to_string(),
                output: String::new(),
            });
        }
        Ok(())
    }
}
