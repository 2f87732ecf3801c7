//! Sweep agent launcher.
//!
//! Registers a sweep with the tracking service and starts (or only
//! prepares) the agent loop that repeatedly executes the training script
//! under sampled configurations.

use std::path::Path;

use sweeps_core::SweepSpec;
use tracing::info;

use crate::error::Result;
use crate::service::{SweepPath, SweepService};
use crate::settings::WandbSettings;

/// Options controlling a sweep agent launch.
#[derive(Debug, Clone)]
pub struct AgentOptions {
    /// Entity to register the sweep under; defaults from the environment.
    pub entity: Option<String>,

    /// Project to register the sweep under; defaults from the environment.
    pub project: Option<String>,

    /// Maximum number of trials for the agent loop; unbounded when `None`.
    pub count: Option<usize>,

    /// Whether to block running the agent loop after registration.
    pub run: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            entity: None,
            project: None,
            count: None,
            run: true,
        }
    }
}

/// Registers a sweep and, when requested, blocks running its agent loop.
///
/// The spec's `program` is filled in from `script_path` when absent. Entity
/// and project resolve from the options first, then the environment; the
/// resulting agent invocation is printed to stdout as
/// `wandb agent <entity>/<project>/<sweep_id>`. Returns the registered
/// sweep's path.
pub fn launch_agent(
    service: &dyn SweepService,
    script_path: &Path,
    spec: &SweepSpec,
    options: &AgentOptions,
) -> Result<SweepPath> {
    let mut spec = spec.clone();
    if spec.program.is_none() {
        spec.program = Some(script_path.to_path_buf());
    }

    let settings = WandbSettings::resolve(options.entity.as_deref(), options.project.as_deref())?;
    let sweep_id = service.register_sweep(&spec, &settings)?;
    let path = SweepPath::new(&settings, sweep_id);

    println!("\nwandb agent {path}\n");

    if options.run {
        info!("running sweep agent for {}", path);
        service.run_agent(&path, options.count)?;
    }
    Ok(path)
}

/// Registers a sweep and prints its agent invocation without running it.
pub fn get_agent(
    service: &dyn SweepService,
    script_path: &Path,
    spec: &SweepSpec,
    options: &AgentOptions,
) -> Result<SweepPath> {
    let options = AgentOptions {
        run: false,
        ..options.clone()
    };
    launch_agent(service, script_path, spec, &options)
}

/// Registers a sweep and blocks running its agent loop.
pub fn run_agent(
    service: &dyn SweepService,
    script_path: &Path,
    spec: &SweepSpec,
    options: &AgentOptions,
) -> Result<SweepPath> {
    let options = AgentOptions {
        run: true,
        ..options.clone()
    };
    launch_agent(service, script_path, spec, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockSweepService;
    use std::path::PathBuf;

    fn options() -> AgentOptions {
        AgentOptions {
            entity: Some("team".to_string()),
            project: Some("tsai".to_string()),
            count: None,
            run: true,
        }
    }

    #[test]
    fn test_launch_fills_program_from_script() {
        let service = MockSweepService::new();
        let spec = SweepSpec::default();

        launch_agent(&service, Path::new("train.py"), &spec, &options()).unwrap();

        let (registered, _) = &service.registered()[0];
        assert_eq!(registered.program, Some(PathBuf::from("train.py")));
    }

    #[test]
    fn test_launch_keeps_existing_program() {
        let service = MockSweepService::new();
        let spec = SweepSpec {
            program: Some(PathBuf::from("sweep_entry.py")),
            ..SweepSpec::default()
        };

        launch_agent(&service, Path::new("train.py"), &spec, &options()).unwrap();

        let (registered, _) = &service.registered()[0];
        assert_eq!(registered.program, Some(PathBuf::from("sweep_entry.py")));
    }

    #[test]
    fn test_launch_runs_agent_with_count() {
        let service = MockSweepService::new();
        let options = AgentOptions {
            count: Some(10),
            ..options()
        };

        let path = launch_agent(&service, Path::new("train.py"), &SweepSpec::default(), &options)
            .unwrap();

        assert_eq!(path.to_string(), "team/tsai/sweep-1");
        assert_eq!(service.agent_runs(), vec![(path, Some(10))]);
    }

    #[test]
    fn test_get_agent_never_runs_the_loop() {
        let service = MockSweepService::new();

        let path =
            get_agent(&service, Path::new("train.py"), &SweepSpec::default(), &options()).unwrap();

        assert_eq!(service.registered().len(), 1);
        assert!(service.agent_runs().is_empty());
        assert_eq!(path.sweep_id, "sweep-1");
    }

    #[test]
    fn test_run_agent_runs_the_loop() {
        let service = MockSweepService::new();
        let options = AgentOptions {
            run: false,
            ..options()
        };

        // run_agent overrides the switch.
        run_agent(&service, Path::new("train.py"), &SweepSpec::default(), &options).unwrap();

        assert_eq!(service.agent_runs().len(), 1);
    }

    #[test]
    fn test_explicit_settings_reach_registration() {
        let service = MockSweepService::new();

        launch_agent(&service, Path::new("train.py"), &SweepSpec::default(), &options()).unwrap();

        let (_, settings) = &service.registered()[0];
        assert_eq!(settings.entity, "team");
        assert_eq!(settings.project, "tsai");
    }
}
