//! Error types for the sweeps core library.
//!
//! This module defines the error types used throughout the sweeps-core crate,
//! providing structured error handling with detailed context.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for sweeps-core operations.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Error when a config or sweep file cannot be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error when a config or sweep file cannot be parsed.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// The file that could not be parsed.
        path: PathBuf,
        /// A description of the parse failure.
        message: String,
    },

    /// Error when a file extension is not a recognized config format.
    #[error("Unsupported config format: {path} (expected .json, .yaml, or .yml)")]
    UnsupportedFormat {
        /// The file with the unrecognized extension.
        path: PathBuf,
    },

    /// Error when a parameter name is not a valid identifier.
    #[error("Invalid parameter name: {name}")]
    InvalidParamName {
        /// The rejected parameter name.
        name: String,
    },

    /// Error when a sweep spec declares no parameters mapping.
    #[error("Sweep spec has no parameters mapping")]
    MissingParameters,

    /// Error when a sweep-declared parameter is absent from the run config.
    #[error("{name} is not a key in config or config.arch_config")]
    UnknownSweepParameter {
        /// The parameter name that was not found.
        name: String,
    },

    /// Error when a parameter search space declares nothing to sample.
    #[error("Parameter {name} has an empty search space")]
    EmptySearchSpace {
        /// The parameter whose search space is empty.
        name: String,
    },
}

/// A specialized Result type for sweeps-core operations.
pub type Result<T> = std::result::Result<T, SweepError>;
