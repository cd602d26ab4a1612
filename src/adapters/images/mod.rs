//! Image adapters - Loading and decoding header/footer banner images.
//!
//! - `SourceImageLoader` - data URIs, HTTP(S) URLs and filesystem paths
//! - `InMemoryImageLoader` - fixed map, for tests and embedded assets
//! - `decode_raster` - bytes to RGB raster

mod decode;
mod in_memory;
mod source_image_loader;

pub use decode::decode_raster;
pub use in_memory::InMemoryImageLoader;
pub use source_image_loader::{SourceImageLoader, SourceImageLoaderConfig};
