use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{path:?} has {errors} error(s)")]
    InvalidCueSheet { path: PathBuf, errors: usize },

    #[error("Output file already exists, use --force to overwrite: {0:?}")]
    OutputAlreadyExists(PathBuf),
}

pub type CliResult<T> = Result<T, CliError>;
