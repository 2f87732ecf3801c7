//! Run configuration model.
//!
//! A run configuration is a flat mapping from hyperparameter name to JSON
//! value, with two recognized nested members lifted into typed fields: the
//! `arch_config` sub-mapping holding architecture-specific hyperparameters,
//! and the optional `sweep` specification describing the search space a
//! sweep will sample over.
//!
//! # Example
//!
//! ```
//! use sweeps_core::config::RunConfig;
//!
//! let mut config = RunConfig::new();
//! config.set("lr", 0.1).unwrap();
//! config.set_arch("depth", 3).unwrap();
//!
//! assert!(config.contains("lr"));
//! assert!(config.arch_contains("depth"));
//! assert!(!config.contains("depth"));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SweepError};
use crate::sweep::SweepSpec;

static PARAM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid param regex"));

/// Validates a hyperparameter name for use in a [`RunConfig`].
pub fn check_param_name(name: &str) -> Result<()> {
    if !PARAM_NAME_RE.is_match(name) {
        return Err(SweepError::InvalidParamName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A run configuration: top-level hyperparameters plus the optional
/// `arch_config` sub-mapping and `sweep` specification.
///
/// Serializes as a single flat JSON object; `arch_config` and `sweep`
/// appear only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Architecture-specific hyperparameters, kept separate from the
    /// top-level training hyperparameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch_config: Option<BTreeMap<String, Value>>,

    /// Sweep specification for the search space this config will be tuned
    /// over, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepSpec>,

    /// Top-level hyperparameters.
    #[serde(flatten)]
    pub params: BTreeMap<String, Value>,
}

impl RunConfig {
    /// Creates an empty run configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a run configuration from a JSON or YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// Sets a top-level hyperparameter, validating the name.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        check_param_name(name)?;
        self.params.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Sets a hyperparameter inside `arch_config`, creating the sub-mapping
    /// if necessary.
    pub fn set_arch(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        check_param_name(name)?;
        self.arch_config
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.into());
        Ok(())
    }

    /// Returns true if the name is a top-level hyperparameter.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if the name is a hyperparameter inside `arch_config`.
    #[inline]
    pub fn arch_contains(&self, name: &str) -> bool {
        self.arch_config
            .as_ref()
            .map_or(false, |arch| arch.contains_key(name))
    }

    /// Returns the top-level value for a name, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Returns the `arch_config` value for a name, if present.
    #[inline]
    pub fn get_arch(&self, name: &str) -> Option<&Value> {
        self.arch_config.as_ref().and_then(|arch| arch.get(name))
    }
}

/// Loads a serde-deserializable value from a JSON or YAML file, selecting
/// the format by extension.
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| SweepError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => serde_json::from_str(&text).map_err(|e| SweepError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| SweepError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        _ => Err(SweepError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
