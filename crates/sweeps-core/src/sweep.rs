//! Sweep specification model.
//!
//! A sweep spec mirrors the declarative search-space documents the tracking
//! service consumes: a search method, an optional metric to optimize, a
//! `parameters` mapping from hyperparameter name to search-space descriptor,
//! and the training entry point to run under each sampled configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::load_file;
use crate::error::{Result, SweepError};

/// The metric a sweep optimizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMetric {
    /// Name of the logged metric.
    pub name: String,

    /// Optimization goal, e.g. "minimize" or "maximize".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// Search-space descriptor for a single hyperparameter.
///
/// At least one of `value`, `values`, or a `min`/`max` pair must be present
/// for the descriptor to be sampleable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSpace {
    /// A single constant value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// A discrete list of candidate values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,

    /// Sampling distribution name, e.g. "uniform" or "log_uniform_values".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,

    /// Lower bound for range-based distributions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound for range-based distributions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ParamSpace {
    /// Builds a constant descriptor.
    pub fn constant(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Builds a discrete-choice descriptor.
    pub fn choices(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: Some(values.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Builds a range descriptor.
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Checks that the descriptor declares something to sample.
    ///
    /// An empty `values` list counts as empty; a range needs both bounds.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.value.is_some() {
            return Ok(());
        }
        if let Some(values) = &self.values {
            if values.is_empty() {
                return Err(SweepError::EmptySearchSpace {
                    name: name.to_string(),
                });
            }
            return Ok(());
        }
        if self.min.is_some() && self.max.is_some() {
            return Ok(());
        }
        Err(SweepError::EmptySearchSpace {
            name: name.to_string(),
        })
    }
}

/// A declarative sweep specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    /// Training entry point the agent executes for each trial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,

    /// Search method, e.g. "grid", "random", or "bayes".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Metric the sweep optimizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<SweepMetric>,

    /// Tunable parameters and their search spaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, ParamSpace>>,

    /// Passthrough keys forwarded to the service untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SweepSpec {
    /// Loads a sweep spec from a JSON or YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// Returns true if the spec declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.program.is_none()
            && self.method.is_none()
            && self.metric.is_none()
            && self.parameters.is_none()
            && self.extra.is_empty()
    }
}
