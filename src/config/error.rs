//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown page size: {0}")]
    InvalidPageSize(String),

    #[error("Page margin must be between 0 and {max} mm, got {value}")]
    InvalidMargin { value: f32, max: f32 },

    #[error("Invalid company e-mail address: {0}")]
    InvalidCompanyEmail(String),

    #[error("Image fetch timeout must be between 1 and 120 seconds")]
    InvalidImageTimeout,

    #[error("Image size limit must be greater than zero")]
    InvalidImageLimit,

    #[error("Output directory must not be empty")]
    EmptyOutputDirectory,

    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
