use thiserror::Error;

#[derive(Error, Debug)]
pub enum FscanError {
    #[error("invalid query: {detail}")]
    InvalidQuery { detail: String },

    #[error("scan failed for {path}: {detail}")]
    Scan { path: String, detail: String },

    #[error("malformed record: {detail}")]
    MalformedRecord { detail: String },

    #[error("event not found: {id}")]
    EventNotFound { id: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl FscanError {
    /// Stable machine-readable code reported alongside the message.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FscanError::InvalidQuery { .. } => "invalid_query",
            FscanError::Scan { .. } | FscanError::Io(_) => "scan_failure",
            FscanError::MalformedRecord { .. } => "malformed_record",
            FscanError::EventNotFound { .. } => "event_not_found",
            FscanError::Json(_) => "json_error",
            FscanError::Csv(_) => "csv_error",
            FscanError::Config(_) => "config_error",
        }
    }

    /// Shorthand for an `InvalidQuery` with a formatted detail message.
    pub fn invalid_query(detail: impl Into<String>) -> Self {
        FscanError::InvalidQuery {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FscanError>;
