//! Core data model for hyperparameter sweep tooling.
//!
//! This crate provides the run configuration and sweep specification types
//! shared by the sweep launcher and CLI:
//!
//! - [`config::RunConfig`]: a flat hyperparameter mapping with an optional
//!   nested `arch_config` sub-mapping and an optional embedded sweep spec.
//! - [`sweep::SweepSpec`]: a declarative search-space specification.
//! - [`update::update_run_config`]: copy-on-write override merging.
//! - [`validate::check_config_sweep`]: checks that every sweep-declared
//!   parameter exists in the configuration it will tune.
//!
//! The external tracking service itself is consumed through the companion
//! `sweeps-wandb` crate; nothing here performs I/O beyond config file
//! loading.

pub mod config;
pub mod error;
pub mod sweep;
pub mod update;
pub mod validate;

pub use config::RunConfig;
pub use error::{Result, SweepError};
pub use sweep::{ParamSpace, SweepMetric, SweepSpec};
pub use update::update_run_config;
pub use validate::check_config_sweep;
