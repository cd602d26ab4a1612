//! Label Contracts - Contract document generation for a music label
//!
//! This crate fills contract templates with per-contract data, resolves the
//! party roles implied by the template type and renders the result as HTML
//! or as a paginated PDF with repeating header and footer banners.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
