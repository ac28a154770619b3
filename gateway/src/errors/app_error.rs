use thiserror::Error;

/// Result type for application startup and state construction
pub type AppResult<T> = Result<T, AppError>;

/// Errors that stop the gateway from starting
#[derive(Debug, Error)]
pub enum AppError {
    /// The outbound HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Invalid server address or other configuration problem found at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener or TLS setup failed
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
