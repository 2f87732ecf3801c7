//! Sweep/config consistency checks.

use crate::config::RunConfig;
use crate::error::{Result, SweepError};

/// Checks that every parameter a config's sweep declares exists in the
/// config it will tune.
///
/// A config without a sweep (or with an empty one) passes trivially. A sweep
/// without a `parameters` mapping fails with
/// [`SweepError::MissingParameters`]. Each declared name must appear either
/// at the top level or inside `arch_config`; the first miss aborts
/// validation with an error naming the key. Each search space is also
/// checked to declare something to sample.
pub fn check_config_sweep(config: &RunConfig) -> Result<()> {
    let sweep = match &config.sweep {
        Some(sweep) if !sweep.is_empty() => sweep,
        _ => return Ok(()),
    };
    let parameters = sweep.parameters.as_ref().ok_or(SweepError::MissingParameters)?;
    for (name, space) in parameters {
        if !config.contains(name) && !config.arch_contains(name) {
            return Err(SweepError::UnknownSweepParameter { name: name.clone() });
        }
        space.validate(name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{ParamSpace, SweepSpec};
    use std::collections::BTreeMap;

    fn config_with_sweep(parameters: Option<BTreeMap<String, ParamSpace>>) -> RunConfig {
        let mut config = RunConfig::new();
        config.set("lr", 0.1).unwrap();
        config.set_arch("depth", 3).unwrap();
        config.sweep = Some(SweepSpec {
            method: Some("random".to_string()),
            parameters,
            ..SweepSpec::default()
        });
        config
    }

    #[test]
    fn test_no_sweep_passes() {
        let mut config = RunConfig::new();
        config.set("lr", 0.1).unwrap();
        assert!(check_config_sweep(&config).is_ok());
    }

    #[test]
    fn test_empty_sweep_passes() {
        let mut config = RunConfig::new();
        config.set("lr", 0.1).unwrap();
        config.sweep = Some(SweepSpec::default());
        assert!(check_config_sweep(&config).is_ok());
    }

    #[test]
    fn test_missing_parameters_mapping() {
        let config = config_with_sweep(None);
        assert!(matches!(
            check_config_sweep(&config),
            Err(SweepError::MissingParameters)
        ));
    }

    #[test]
    fn test_all_parameters_present() {
        let parameters = BTreeMap::from([
            ("lr".to_string(), ParamSpace::range(1e-5, 1e-1)),
            ("depth".to_string(), ParamSpace::choices([3.into(), 6.into()])),
        ]);
        let config = config_with_sweep(Some(parameters));
        assert!(check_config_sweep(&config).is_ok());
    }

    #[test]
    fn test_unknown_parameter_named_in_error() {
        let parameters = BTreeMap::from([("dropout".to_string(), ParamSpace::range(0.0, 0.5))]);
        let config = config_with_sweep(Some(parameters));

        let err = check_config_sweep(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dropout is not a key in config or config.arch_config"
        );
    }

    #[test]
    fn test_empty_parameters_mapping_passes() {
        let config = config_with_sweep(Some(BTreeMap::new()));
        assert!(check_config_sweep(&config).is_ok());
    }

    #[test]
    fn test_empty_search_space_reported() {
        let parameters = BTreeMap::from([("lr".to_string(), ParamSpace::default())]);
        let config = config_with_sweep(Some(parameters));

        let err = check_config_sweep(&config).unwrap_err();
        assert!(matches!(err, SweepError::EmptySearchSpace { .. }));
    }

    #[test]
    fn test_sweep_key_itself_is_not_a_parameter_location() {
        // A sweep declaring a parameter named "sweep" must still find a
        // matching hyperparameter; the sweep member itself does not count.
        let parameters = BTreeMap::from([("sweep".to_string(), ParamSpace::constant(1))]);
        let config = config_with_sweep(Some(parameters));

        let err = check_config_sweep(&config).unwrap_err();
        assert!(matches!(err, SweepError::UnknownSweepParameter { .. }));
    }
}
