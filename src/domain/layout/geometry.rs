//! Page sizes and margins, in PDF points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Points per millimetre.
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Supported portrait page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A4 => write!(f, "a4"),
            PageSize::Letter => write!(f, "letter"),
        }
    }
}

impl FromStr for PageSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" | "carta" => Ok(PageSize::Letter),
            other => Err(ValidationError::invalid_format(
                "page_size",
                format!("unknown page size '{}'", other),
            )),
        }
    }
}

/// Fixed page geometry for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub size: PageSize,
    pub width: f32,
    pub height: f32,
    /// Left and right margin.
    pub margin: f32,
}

impl PageGeometry {
    pub fn new(size: PageSize, margin_mm: f32) -> Result<Self, ValidationError> {
        let (width, height) = size.dimensions();
        let margin = margin_mm * POINTS_PER_MM;
        if !margin.is_finite() || margin < 0.0 || margin * 2.0 >= width {
            return Err(ValidationError::out_of_range(
                "margin_mm",
                0.0,
                f64::from(width / 2.0 / POINTS_PER_MM),
                f64::from(margin_mm),
            ));
        }
        Ok(Self {
            size,
            width,
            height,
            margin,
        })
    }

    /// A4 portrait with a 20 mm margin.
    pub fn a4() -> Self {
        let (width, height) = PageSize::A4.dimensions();
        Self {
            size: PageSize::A4,
            width,
            height,
            margin: 20.0 * POINTS_PER_MM,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_has_twenty_mm_margin() {
        let g = PageGeometry::a4();
        assert!((g.margin - 56.69).abs() < 0.01);
        assert!((g.content_width() - (595.28 - 2.0 * 56.69)).abs() < 0.05);
    }

    #[test]
    fn page_size_parses_case_insensitively() {
        assert_eq!("A4".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!(" letter ".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert!("tabloid".parse::<PageSize>().is_err());
    }

    #[test]
    fn oversized_margin_is_rejected() {
        assert!(PageGeometry::new(PageSize::A4, 120.0).is_err());
        assert!(PageGeometry::new(PageSize::A4, -1.0).is_err());
        assert!(PageGeometry::new(PageSize::Letter, 25.4).is_ok());
    }
}
