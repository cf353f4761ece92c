use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid time format, expected three colon-separated numbers: {0}")]
    InvalidFormat(String),

    #[error("Negative time value: {0}")]
    Negative(String),

    #[error("Minutes out of range (0-59): {0}")]
    MinutesOutOfRange(String),

    #[error("Seconds out of range (0-59): {0}")]
    SecondsOutOfRange(String),

    #[error("Frames out of range (0-74): {0}")]
    FramesOutOfRange(String),

    #[error("Time value too large: {0}")]
    TooLarge(String),

    #[error("Invalid seconds value: {0}")]
    InvalidSeconds(String),

    #[error("Time subtraction underflow: {lhs} - {rhs}")]
    Underflow { lhs: String, rhs: String },

    #[error("Time addition overflow: {lhs} + {rhs}")]
    Overflow { lhs: String, rhs: String },
}

pub type TimeResult<T> = Result<T, TimeError>;
