//! Error types for the Weights & Biases service boundary.

use thiserror::Error;

/// The main error type for sweeps-wandb operations.
#[derive(Debug, Error)]
pub enum WandbError {
    /// The wandb client could not be started at all.
    #[error("wandb client unavailable ({message}); you need to install wandb to run sweeps")]
    ClientUnavailable {
        /// Why the client could not be started.
        message: String,
    },

    /// The client ran but exited with a failure status.
    #[error("wandb {command} failed ({status}): {output}")]
    CommandFailed {
        /// The client subcommand that failed.
        command: String,
        /// The exit status description.
        status: String,
        /// Captured client output.
        output: String,
    },

    /// The client output contained no sweep identifier.
    #[error("no sweep id found in wandb output: {output}")]
    SweepIdNotFound {
        /// Captured client output.
        output: String,
    },

    /// No entity was given and the environment provides none.
    #[error("no entity given and WANDB_ENTITY is not set")]
    MissingEntity,

    /// No project was given and the environment provides none.
    #[error("no project given and WANDB_PROJECT is not set")]
    MissingProject,

    /// Error while staging the sweep spec for the client.
    #[error("failed to stage sweep spec: {0}")]
    Stage(#[from] std::io::Error),

    /// Error while serializing the sweep spec for the client.
    #[error("failed to serialize sweep spec: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// Error from the core configuration model.
    #[error(transparent)]
    Core(#[from] sweeps_core::SweepError),
}

/// A specialized Result type for sweeps-wandb operations.
pub type Result<T> = std::result::Result<T, WandbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WandbError::ClientUnavailable {
            message: "executable not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "wandb client unavailable (executable not found); you need to install wandb to run sweeps"
        );

        let err = WandbError::MissingEntity;
        assert_eq!(err.to_string(), "no entity given and WANDB_ENTITY is not set");

        let err = WandbError::MissingProject;
        assert_eq!(err.to_string(), "no project given and WANDB_PROJECT is not set");
    }
}
