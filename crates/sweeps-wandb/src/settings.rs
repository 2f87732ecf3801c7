//! Entity/project resolution for the tracking service.
//!
//! The service scopes every sweep under `entity/project`. Callers may pass
//! both explicitly; anything missing falls back to the conventional
//! environment variables. Resolution happens once, at the call boundary, so
//! the launch logic itself never consults the global environment.

use crate::error::{Result, WandbError};

/// Environment variable holding the default entity (team or username).
pub const WANDB_ENTITY_ENV: &str = "WANDB_ENTITY";

/// Environment variable holding the default project.
pub const WANDB_PROJECT_ENV: &str = "WANDB_PROJECT";

/// Resolved entity/project pair a sweep is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WandbSettings {
    /// Team or username owning the sweep.
    pub entity: String,

    /// Project the sweep belongs to.
    pub project: String,
}

impl WandbSettings {
    /// Resolves settings from explicit values, falling back to the
    /// environment for anything not given.
    pub fn resolve(entity: Option<&str>, project: Option<&str>) -> Result<Self> {
        let entity = match entity {
            Some(entity) => entity.to_string(),
            None => env_nonempty(WANDB_ENTITY_ENV).ok_or(WandbError::MissingEntity)?,
        };
        let project = match project {
            Some(project) => project.to_string(),
            None => env_nonempty(WANDB_PROJECT_ENV).ok_or(WandbError::MissingProject)?,
        };
        Ok(Self { entity, project })
    }
}

fn env_nonempty(var: &str) -> Option<String> {
    std::env::var(var).ok().and_then(|value| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}
