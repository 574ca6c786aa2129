//! Error types for graphbook

use thiserror::Error;

/// Result type alias using GraphbookError
pub type Result<T> = std::result::Result<T, GraphbookError>;

/// Error type alias for convenience
pub type Error = GraphbookError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const FEATURE_DISABLED: i32 = 4;
    pub const AUTH_FAILED: i32 = 5;
}

/// Main error type for graphbook
#[derive(Debug, Error)]
pub enum GraphbookError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (HTTP {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("Service not enabled: {0}")]
    FeatureDisabled(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid username or password")]
    Auth,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl GraphbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DocumentNotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidInput(_) | Self::Config(_) => exit_codes::INVALID_INPUT,
            Self::FeatureDisabled(_) => exit_codes::FEATURE_DISABLED,
            Self::Auth => exit_codes::AUTH_FAILED,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    /// True for errors that should leave the current view untouched
    /// and only surface a transient notification.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::FeatureDisabled(_)
        )
    }
}
