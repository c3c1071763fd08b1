//! Error type for the command-line front end.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Doomloader(#[from] doomloader::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<doomloader::core::Error> for CliError {
    fn from(e: doomloader::core::Error) -> Self {
        CliError::Doomloader(e.into())
    }
}

impl From<doomloader::neural::Error> for CliError {
    fn from(e: doomloader::neural::Error) -> Self {
        CliError::Doomloader(e.into())
    }
}

impl From<doomloader::files::Error> for CliError {
    fn from(e: doomloader::files::Error) -> Self {
        CliError::Doomloader(e.into())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
