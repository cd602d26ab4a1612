//! Page rendering configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::layout::{PageGeometry, PageSize};

/// Largest margin accepted, in millimetres.
const MAX_MARGIN_MM: f32 = 60.0;

/// Paginated output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderingConfig {
    /// `a4` or `letter`
    #[serde(default = "default_page_size")]
    pub page_size: String,

    /// Margin on all four sides, in millimetres
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f32,
}

impl RenderingConfig {
    /// Builds the page geometry these settings describe.
    pub fn geometry(&self) -> Result<PageGeometry, ValidationError> {
        let size: PageSize = self
            .page_size
            .parse()
            .map_err(|_| ValidationError::InvalidPageSize(self.page_size.clone()))?;
        PageGeometry::new(size, self.margin_mm).map_err(|_| ValidationError::InvalidMargin {
            value: self.margin_mm,
            max: MAX_MARGIN_MM,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=MAX_MARGIN_MM).contains(&self.margin_mm) {
            return Err(ValidationError::InvalidMargin {
                value: self.margin_mm,
                max: MAX_MARGIN_MM,
            });
        }
        self.geometry().map(|_| ())
    }
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            margin_mm: default_margin_mm(),
        }
    }
}

fn default_page_size() -> String {
    "a4".to_string()
}

fn default_margin_mm() -> f32 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a4_with_20mm_margin() {
        let geometry = RenderingConfig::default().geometry().unwrap();
        assert_eq!(geometry.size, PageSize::A4);
        assert!((geometry.margin - 56.69).abs() < 0.01);
    }

    #[test]
    fn letter_is_accepted() {
        let config = RenderingConfig {
            page_size: "letter".into(),
            ..Default::default()
        };
        assert_eq!(config.geometry().unwrap().size, PageSize::Letter);
    }

    #[test]
    fn rejects_unknown_page_size() {
        let config = RenderingConfig {
            page_size: "a3".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPageSize(_))));
    }

    #[test]
    fn rejects_oversized_margin() {
        let config = RenderingConfig {
            margin_mm: 80.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidMargin { .. })));
    }
}
