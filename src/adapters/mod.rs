//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Contract renderers, PDF encoding, input files, output storage
//! - `images` - Banner image loading and decoding

pub mod document;
pub mod images;

pub use document::{
    HtmlContractRenderer, LocalDocumentFileStorage, PaginatedContractRenderer, PdfWriter,
};
pub use images::{InMemoryImageLoader, SourceImageLoader, SourceImageLoaderConfig};
