//! Document adapters - Implementations for contract rendering and storage.
//!
//! This module provides adapters for the document-related ports:
//! - `HtmlContractRenderer` - Renders a contract as a standalone HTML page
//! - `PaginatedContractRenderer` - Lays a contract out on fixed-size pages
//! - `PdfWriter` - Encodes paginated documents as PDF
//! - `LocalDocumentFileStorage` - Stores generated files on local filesystem
//! - `input_loader` - Reads templates and contract data from JSON/YAML

pub mod input_loader;
mod local_file_storage;
mod markup_renderer;
mod paginated_renderer;
mod pdf_writer;

pub use input_loader::{InputError, InputFormat};
pub use local_file_storage::LocalDocumentFileStorage;
pub use markup_renderer::HtmlContractRenderer;
pub use paginated_renderer::{layout_contract, PaginatedContractRenderer};
pub use pdf_writer::{encode_win_ansi, PdfWriter};
