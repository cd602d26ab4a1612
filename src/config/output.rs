//! Output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Where generated contracts go and in which format by default.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// `pdf` or `html`
    #[serde(default = "default_format")]
    pub format: String,
}

impl OutputConfig {
    pub fn export_format(&self) -> Result<ExportFormat, ValidationError> {
        self.format
            .parse()
            .map_err(|_| ValidationError::InvalidOutputFormat(self.format.clone()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.directory.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDirectory);
        }
        self.export_format().map(|_| ())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            format: default_format(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("contratos")
}

fn default_format() -> String {
    "pdf".to_string()
}
