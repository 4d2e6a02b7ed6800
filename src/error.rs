//! Application Errors
//!
//! One error type shared by state mutations, storage and the import command.

/// Common result type for app operations
pub type AppResult<T> = Result<T, AppError>;

/// App-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No visible todo with this id
    NotFound(u32),
    InvalidInput(String),
    /// localStorage unavailable or rejected the write
    Storage(String),
    Serialization(String),
    Network(String),
    /// `next_id` cannot advance any further
    IdsExhausted,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(id) => write!(f, "Not found: todo #{}", id),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::IdsExhausted => write!(f, "No todo ids left"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}
