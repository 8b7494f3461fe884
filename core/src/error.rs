use thiserror::Error;

#[derive(Error, Debug)]
pub enum FootprintError {
    /// A fuel or diet value that is not recognised, or that the coefficient
    /// table has no factor for.
    #[error("Invalid {category} category: '{value}'")]
    InvalidCategory { category: &'static str, value: String },

    #[error("Project with ID {0} not found")]
    UnknownProject(u32),

    #[error("Nothing to save: calculate a footprint first")]
    NothingToSave,

    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    #[error("Ambiguous key: '{key}' matches {candidates:?}")]
    AmbiguousKey { key: String, candidates: Vec<String> },

    #[error("Invalid argument for '{action}': {reason}")]
    InvalidArgument { action: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
