//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Rendering Ports
//!
//! - `ContractGenerator` - Standalone markup rendering
//! - `PaginatedContractGenerator` - Fixed-page rendering
//! - `PaginatedDocumentEncoder` - Binary serialisation of paginated documents
//!
//! ## Resource Ports
//!
//! - `ImageLoader` - Banner image bytes by reference
//! - `DocumentFileStorage` - Persistence of generated files

mod contract_generator;
mod document_export_service;
mod document_file_storage;
mod image_loader;

pub use contract_generator::{
    ContractGenerator, ContractRequest, DocumentError, PaginatedContractGenerator,
};
pub use document_export_service::{
    ExportError, ExportFormat, ExportedDocument, PaginatedDocumentEncoder,
};
pub use document_file_storage::{
    DocumentFileStorage, FileMetadata, FilePath, StorageError, StoredFile,
};
pub use image_loader::{ImageLoader, ImageLoadError};
