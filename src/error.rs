use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unsupported resource \"{resource}\" (only \"traffic\" is available)")]
    UnsupportedResource { resource: String },

    #[error("Repository name is empty")]
    EmptyRepository,

    #[error("Failed to read password: {0}")]
    Password(std::io::Error),

    #[error("Request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render JSON output: {0}")]
    Render(serde_json::Error),

    #[error("Malformed traffic response: missing or invalid \"{field}\"")]
    MalformedResponse { field: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    pub(crate) fn malformed(field: impl Into<String>) -> Self {
        AppError::MalformedResponse {
            field: field.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
