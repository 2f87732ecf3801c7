//! Run-config override merging.
//!
//! Override values produced by a sweep trial land either on a top-level
//! hyperparameter or, failing that, on one inside `arch_config`. Keys that
//! match neither are skipped with a warning so a stray override never aborts
//! a run.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::RunConfig;

/// Merges `overrides` into a copy of `config`.
///
/// Each override key present at the top level replaces that value; a key
/// absent there but present inside `arch_config` replaces the value there
/// instead. Keys found in neither location are skipped with a warning. The
/// base config is never mutated; the merged copy is returned.
///
/// With `verbose` set, each applied change is logged at info level.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use serde_json::json;
/// use sweeps_core::config::RunConfig;
/// use sweeps_core::update::update_run_config;
///
/// let mut config = RunConfig::new();
/// config.set("lr", 0.1).unwrap();
/// config.set_arch("depth", 3).unwrap();
///
/// let overrides = BTreeMap::from([("depth".to_string(), json!(5))]);
/// let updated = update_run_config(&config, &overrides, false);
///
/// assert_eq!(updated.get_arch("depth"), Some(&json!(5)));
/// assert_eq!(config.get_arch("depth"), Some(&json!(3)));
/// ```
pub fn update_run_config(
    config: &RunConfig,
    overrides: &BTreeMap<String, Value>,
    verbose: bool,
) -> RunConfig {
    let mut updated = config.clone();
    for (key, value) in overrides {
        if let Some(slot) = updated.params.get_mut(key) {
            if verbose {
                info!("config.{} {} updated to {}", key, slot, value);
            }
            *slot = value.clone();
        } else if let Some(slot) = updated
            .arch_config
            .as_mut()
            .and_then(|arch| arch.get_mut(key))
        {
            if verbose {
                info!("config.arch_config.{} {} updated to {}", key, slot, value);
            }
            *slot = value.clone();
        } else {
            warn!("{} not available in config or config.arch_config", key);
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_config() -> RunConfig {
        let mut config = RunConfig::new();
        config.set("lr", 0.1).unwrap();
        config.set_arch("depth", 3).unwrap();
        config
    }

    #[test]
    fn test_top_level_override() {
        let config = base_config();
        let overrides = BTreeMap::from([("lr".to_string(), json!(0.01))]);

        let updated = update_run_config(&config, &overrides, false);

        assert_eq!(updated.get("lr"), Some(&json!(0.01)));
        assert_eq!(updated.get_arch("depth"), Some(&json!(3)));
        // Base is untouched.
        assert_eq!(config.get("lr"), Some(&json!(0.1)));
    }

    #[test]
    fn test_arch_config_override() {
        let config = base_config();
        let overrides = BTreeMap::from([("depth".to_string(), json!(5))]);

        let updated = update_run_config(&config, &overrides, false);

        assert_eq!(updated.get_arch("depth"), Some(&json!(5)));
        assert_eq!(config.get_arch("depth"), Some(&json!(3)));
    }

    #[test]
    fn test_unknown_key_leaves_config_unchanged() {
        let config = base_config();
        let overrides = BTreeMap::from([("unknown".to_string(), json!(1))]);

        let updated = update_run_config(&config, &overrides, false);

        assert_eq!(updated, config);
        assert!(!updated.contains("unknown"));
        assert!(!updated.arch_contains("unknown"));
    }

    #[test]
    fn test_top_level_shadows_arch_config() {
        let mut config = base_config();
        config.set("depth", 12).unwrap();
        let overrides = BTreeMap::from([("depth".to_string(), json!(5))]);

        let updated = update_run_config(&config, &overrides, false);

        // The top-level key wins; arch_config keeps its value.
        assert_eq!(updated.get("depth"), Some(&json!(5)));
        assert_eq!(updated.get_arch("depth"), Some(&json!(3)));
    }

    #[test]
    fn test_mixed_overrides() {
        let config = base_config();
        let overrides = BTreeMap::from([
            ("lr".to_string(), json!(0.001)),
            ("depth".to_string(), json!(9)),
            ("unknown".to_string(), json!("x")),
        ]);

        let updated = update_run_config(&config, &overrides, true);

        assert_eq!(updated.get("lr"), Some(&json!(0.001)));
        assert_eq!(updated.get_arch("depth"), Some(&json!(9)));
        assert_eq!(updated.params.len(), 1);
    }

    #[test]
    fn test_no_arch_config() {
        let mut config = RunConfig::new();
        config.set("lr", 0.1).unwrap();
        let overrides = BTreeMap::from([("depth".to_string(), json!(5))]);

        let updated = update_run_config(&config, &overrides, false);

        assert_eq!(updated, config);
    }

    #[test]
    fn test_empty_overrides() {
        let config = base_config();
        let updated = update_run_config(&config, &BTreeMap::new(), false);
        assert_eq!(updated, config);
    }
}
