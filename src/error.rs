//! Centralized error type for the doomloader umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] doomloader_core::Error),

    #[error(transparent)]
    Neural(#[from] doomloader_neural::Error),

    #[cfg(feature = "files")]
    #[error("Files: {0}")]
    Files(#[from] doomloader_files::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
