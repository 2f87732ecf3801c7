//! The sweep service boundary.
//!
//! The external tracking service is consumed behind [`SweepService`] so the
//! launcher and CLI stay testable without a real client. Production code
//! uses the [`crate::cli_backend::WandbCliBackend`]; tests use
//! [`MockSweepService`].

use std::fmt;
use std::sync::Mutex;

use sweeps_core::SweepSpec;

use crate::error::Result;
use crate::settings::WandbSettings;

/// Fully-qualified identifier of a registered sweep.
///
/// Displays as `entity/project/sweep_id`, the form the service's agent
/// command expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPath {
    /// Team or username owning the sweep.
    pub entity: String,

    /// Project the sweep belongs to.
    pub project: String,

    /// Service-assigned sweep identifier.
    pub sweep_id: String,
}

impl SweepPath {
    /// Builds a sweep path from resolved settings and a sweep identifier.
    pub fn new(settings: &WandbSettings, sweep_id: impl Into<String>) -> Self {
        Self {
            entity: settings.entity.clone(),
            project: settings.project.clone(),
            sweep_id: sweep_id.into(),
        }
    }
}

impl fmt::Display for SweepPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.entity, self.project, self.sweep_id)
    }
}

/// Operations the external sweep service exposes.
///
/// The service owns scheduling and search-space sampling; this trait only
/// covers what the launcher needs: registering a sweep and blocking on the
/// agent loop.
pub trait SweepService {
    /// Registers a sweep under the given entity/project, returning the
    /// service-assigned sweep identifier.
    fn register_sweep(&self, spec: &SweepSpec, settings: &WandbSettings) -> Result<String>;

    /// Runs the agent loop for a registered sweep, blocking for up to
    /// `count` trials (unbounded when `None`).
    fn run_agent(&self, path: &SweepPath, count: Option<usize>) -> Result<()>;
}

/// In-memory stand-in for the tracking service.
///
/// Records every registration and agent run so tests can assert on the
/// launcher's behavior without network access or a wandb installation.
#[derive(Debug, Default)]
pub struct MockSweepService {
    registered: Mutex<Vec<(SweepSpec, WandbSettings)>>,
    agent_runs: Mutex<Vec<(SweepPath, Option<usize>)>>,
}

impl MockSweepService {
    /// Creates an empty mock service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the specs registered so far, with the settings used.
    pub fn registered(&self) -> Vec<(SweepSpec, WandbSettings)> {
        self.registered.lock().expect("mock lock").clone()
    }

    /// Returns the agent runs requested so far.
    pub fn agent_runs(&self) -> Vec<(SweepPath, Option<usize>)> {
        self.agent_runs.lock().expect("mock lock").clone()
    }
}

impl SweepService for MockSweepService {
    fn register_sweep(&self, spec: &SweepSpec, settings: &WandbSettings) -> Result<String> {
        let mut registered = self.registered.lock().expect("mock lock");
        registered.push((spec.clone(), settings.clone()));
        Ok(format!("sweep-{}", registered.len()))
    }

    fn run_agent(&self, path: &SweepPath, count: Option<usize>) -> Result<()> {
        self.agent_runs
            .lock()
            .expect("mock lock")
            .push((path.clone(), count));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_path_display() {
        let settings = WandbSettings {
            entity: "team".to_string(),
            project: "tsai".to_string(),
        };
        let path = SweepPath::new(&settings, "abc123");
        assert_eq!(path.to_string(), "team/tsai/abc123");
    }

    #[test]
    fn test_mock_records_registrations_and_runs() {
        let service = MockSweepService::new();
        let settings = WandbSettings {
            entity: "team".to_string(),
            project: "tsai".to_string(),
        };

        let id = service
            .register_sweep(&SweepSpec::default(), &settings)
            .unwrap();
        assert_eq!(id, "sweep-1");

        let path = SweepPath::new(&settings, id.as_str());
        service.run_agent(&path, Some(5)).unwrap();

        assert_eq!(service.registered().len(), 1);
        assert_eq!(service.agent_runs(), vec![(path, Some(5))]);
    }
}
