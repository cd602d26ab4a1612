//! Fixed-page layout: geometry, text wrapping and page composition.

mod composer;
mod document;
mod geometry;
mod text;

pub use composer::{
    Align, BannerSpec, PageComposer, SignatureColumn, TextStyle, LINE_HEIGHT_FACTOR, SAFETY_MARGIN,
};
pub use document::{
    Banner, BannerKind, Element, FontWeight, ImageId, Page, PaginatedDocument, RasterImage,
};
pub use geometry::{PageGeometry, PageSize, POINTS_PER_MM};
pub use text::{text_width, wrap};
