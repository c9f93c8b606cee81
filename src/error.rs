use std::fmt;

/// Custom error type for GitHub organization operations
#[derive(Debug)]
pub enum GhError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API answered 404
    NotFound { message: String },
    /// API returned any other error response
    Api { status: u16, message: String },
    /// A required argument was missing or empty (raised before any I/O)
    Validation(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl GhError {
    /// HTTP status carried by the error, if it came from the API
    pub fn status(&self) -> Option<u16> {
        match self {
            GhError::NotFound { .. } => Some(404),
            GhError::Api { status, .. } => Some(*status),
            GhError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is the not-found error kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, GhError::NotFound { .. })
    }
}

impl fmt::Display for GhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GhError::NotFound { message } => write!(f, "Not found: {}", message),
            GhError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GhError::Validation(msg) => write!(f, "Invalid argument: {}", msg),
            GhError::Json(msg) => write!(f, "JSON error: {}", msg),
            GhError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GhError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GhError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GhError {
    fn from(err: reqwest::Error) -> Self {
        GhError::Http(err)
    }
}

impl From<serde_json::Error> for GhError {
    fn from(err: serde_json::Error) -> Self {
        GhError::Json(err.to_string())
    }
}

/// Result type alias for GitHub operations
pub type Result<T> = std::result::Result<T, GhError>;
