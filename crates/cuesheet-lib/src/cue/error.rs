use crate::time::error::TimeError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CueError {
    #[error(transparent)]
    TimeError(#[from] TimeError),

    #[error("Unknown file type: {0}")]
    InvalidFileType(String),

    #[error("Unknown track type: {0}")]
    InvalidTrackType(String),

    #[error("Unknown track flag: {0}")]
    InvalidFlag(String),

    #[error("Invalid quoted string: {0}")]
    InvalidQuotedString(String),

    #[error("Invalid {0} arguments, expected: {1}")]
    InvalidArguments(&'static str, &'static str),

    #[error("CATALOG must be exactly 13 digits: {0}")]
    InvalidCatalog(String),

    #[error("Track number must be between 1 and 99: {0}")]
    InvalidTrackNumber(String),

    #[error("Track number {0:02} is already used")]
    DuplicateTrackNumber(u8),

    #[error("Index number must be between 0 and 99: {0}")]
    InvalidIndexNumber(String),

    #[error("{0} must be inside a TRACK")]
    OutsideTrack(&'static str),
}

pub type CueResult<T> = Result<T, CueError>;
