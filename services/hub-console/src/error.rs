//! Error types for the hub console host

/// Errors that can occur in the hub console host
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Console(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for hub console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
