//! Weights & Biases sweep service boundary and agent launcher.
//!
//! The tracking service is consumed, never reimplemented: this crate wraps
//! its command-line client behind the [`service::SweepService`] trait and
//! builds the sweep agent launcher on top.
//!
//! - [`service`]: the `SweepService` trait, [`service::SweepPath`], and an
//!   in-memory mock for tests.
//! - [`cli_backend`]: the production backend driving the `wandb` executable.
//! - [`settings`]: explicit entity/project resolution
//!   (`WANDB_ENTITY`/`WANDB_PROJECT` fallbacks), done once at the call
//!   boundary.
//! - [`agent`]: `launch_agent` plus the `get_agent`/`run_agent` variants.

pub mod agent;
pub mod cli_backend;
pub mod error;
pub mod service;
pub mod settings;

pub use agent::{get_agent, launch_agent, run_agent, AgentOptions};
pub use cli_backend::WandbCliBackend;
pub use error::{Result, WandbError};
pub use service::{MockSweepService, SweepPath, SweepService};
pub use settings::{WandbSettings, WANDB_ENTITY_ENV, WANDB_PROJECT_ENV};
