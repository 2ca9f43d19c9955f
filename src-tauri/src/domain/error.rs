use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Internal(String),
    ValidationError(String),
    ParseError(String),
    ConfigError(String),
    LLMError(String),
    /// The provider answered with a non-success HTTP status.
    ProviderStatus {
        status: u16,
        body: String,
    },
    ShortcutError(String),
    IoError(String),
}

impl AppError {
    /// Credential problems surface as 400-class answers from the provider.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(
            self,
            AppError::ProviderStatus {
                status: 400 | 401 | 403,
                ..
            }
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::LLMError(msg) => write!(f, "LLM error: {}", msg),
            AppError::ProviderStatus { status, body } => {
                write!(f, "Provider error ({}): {}", status, body)
            }
            AppError::ShortcutError(msg) => write!(f, "Shortcut error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

// Implement std::error::Error so Tauri can properly serialize the error
impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
