use thiserror::Error;

/// Errors produced while talking to the console backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend error {code}: {msg}")]
    Backend { code: String, msg: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ApiError {
    /// Backend envelope code, if the failure came from the backend itself
    pub fn backend_code(&self) -> Option<&str> {
        match self {
            ApiError::Backend { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// HTTP status, if the failure was a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
