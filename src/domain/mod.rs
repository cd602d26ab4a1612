//! Domain layer: pure contract assembly and page layout.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (money, number words, dates, errors)
//! - `contract` - Templates, contract data, tokens, parties and clauses
//! - `layout` - Page geometry, text wrapping and page composition

pub mod contract;
pub mod foundation;
pub mod layout;
