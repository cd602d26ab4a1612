//! In-memory paginated document.
//!
//! Coordinates are in points, measured from the top-left corner of the page.
//! Text `y` is the baseline. Encoders flip to their own coordinate space.

use serde::Serialize;

use super::geometry::PageGeometry;

/// Index into [`PaginatedDocument::images`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageId(pub usize);

/// Decoded 8-bit RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    /// Row-major RGB triples, `width_px * height_px * 3` bytes.
    pub rgb: Vec<u8>,
}

impl RasterImage {
    /// Height when drawn at `width` points, aspect ratio preserved.
    pub fn height_at_width(&self, width: f32) -> f32 {
        if self.width_px == 0 {
            return 0.0;
        }
        width * self.height_px as f32 / self.width_px as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        text: String,
    },
    /// Horizontal line.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
    },
    Image {
        id: ImageId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl Element {
    /// Text content, when this is a text element.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Vertical extent `(top, bottom)`.
    pub fn vertical_extent(&self) -> (f32, f32) {
        match self {
            Element::Text { y, size, .. } => (y - size, *y),
            Element::Rule { y, thickness, .. } => (*y, y + thickness),
            Element::Image { y, height, .. } => (*y, y + height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerKind {
    Image,
    Text,
}

/// A header or footer stamped on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    /// Top of the reserved band.
    pub top: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub header: Banner,
    pub body: Vec<Element>,
    pub footer: Banner,
}

impl Page {
    /// Text of the body in drawing order.
    pub fn body_text(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(Element::text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
    pub images: Vec<RasterImage>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn image(&self, id: ImageId) -> Option<&RasterImage> {
        self.images.get(id.0)
    }
}
