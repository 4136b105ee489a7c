use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid trip request: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to decode response at {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid API key for the text generation service")]
    Unauthorized,

    #[error("Text generation model is still loading")]
    ModelLoading,

    #[error("Rate limit exceeded: retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PlannerError::Http(err) => err.is_timeout() || err.is_connect(),
            PlannerError::ModelLoading => true,
            PlannerError::RateLimit { .. } => true,
            PlannerError::Timeout(_) => true,
            PlannerError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Decode { .. } => "DECODE_ERROR",
            PlannerError::Unauthorized => "UNAUTHORIZED",
            PlannerError::ModelLoading => "MODEL_LOADING",
            PlannerError::RateLimit { .. } => "RATE_LIMIT_ERROR",
            PlannerError::Api { .. } => "API_ERROR",
            PlannerError::Timeout(_) => "TIMEOUT_ERROR",
            PlannerError::Geocoding(_) => "GEOCODING_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}
