//! Error types for model loading and amp simulation.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`AmpSimulator`](crate::AmpSimulator).
///
/// Every loader-side failure surfaces as [`Error::ModelLoad`], whatever branch
/// of the loader produced it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load NAM model {}: {source}", .path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Model '{name}' not loaded. Available models: {available:?}")]
    UnknownModel { name: String, available: Vec<String> },

    #[error("No NAM model loaded for processing")]
    NoModelSelected,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Core: {0}")]
    Core(#[from] doomloader_core::Error),
}

/// Errors raised by [`ModelLoader`](crate::ModelLoader).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("NAM file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format: {extension:?} ({})", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Error loading NAM file {}: {cause}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        cause: LoadCause,
    },

    #[error("Invalid NAM model: {}", .0.display())]
    InvalidModel(PathBuf),
}

/// Underlying reason for a [`LoadError::LoadFailure`].
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAMapping(&'static str),
}

impl LoadError {
    pub(crate) fn failure(path: impl Into<PathBuf>, cause: impl Into<LoadCause>) -> Self {
        LoadError::LoadFailure {
            path: path.into(),
            cause: cause.into(),
        }
    }
}
