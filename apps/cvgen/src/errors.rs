use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Only `MissingField`, `Json` and `Config` are fatal for a run. `Render` and
/// `Io` are caught per artifact so sibling formats and files keep going.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Render error ({format}): {message}")]
    Render {
        format: &'static str,
        message: String,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wraps an `io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short reason string for per-artifact report lines.
    pub fn reason(&self) -> String {
        match self {
            AppError::Io { source, .. } => source.to_string(),
            AppError::Render { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
