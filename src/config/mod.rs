//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LABEL_CONTRACTS` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use label_contracts::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing contracts to {}", config.output.directory.display());
//! ```

mod company;
mod error;
mod images;
mod logging;
mod output;
mod rendering;

pub use company::CompanyConfig;
pub use error::{ConfigError, ValidationError};
pub use images::ImagesConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use rendering::RenderingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Page size and margins for paginated output
    #[serde(default)]
    pub rendering: RenderingConfig,

    /// Issuing company identity overrides
    #[serde(default)]
    pub company: CompanyConfig,

    /// Banner image fetch limits
    #[serde(default)]
    pub images: ImagesConfig,

    /// Output directory and default format
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `LABEL_CONTRACTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LABEL_CONTRACTS__RENDERING__PAGE_SIZE=letter` -> `rendering.page_size = "letter"`
    /// - `LABEL_CONTRACTS__COMPANY__NAME=...` -> `company.name = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LABEL_CONTRACTS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.rendering.validate()?;
        self.company.validate()?;
        self.images.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
