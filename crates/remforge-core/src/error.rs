use std::fmt;

#[derive(Debug)]
pub enum SessionError {
    /// Export or aggregation requested with no current sequence.
    NoData,
    /// A batch with no files was submitted. The prior sequence is kept.
    EmptyBatch,
    UnknownFormat(String),
    Json(serde_json::Error),
    /// Imported data parsed but failed validation.
    Invalid(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoData => write!(f, "no data to export"),
            SessionError::EmptyBatch => write!(f, "no files selected"),
            SessionError::UnknownFormat(name) => write!(f, "unknown export format: {name}"),
            SessionError::Json(e) => write!(f, "JSON error: {e}"),
            SessionError::Invalid(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
