//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, locale formatting helpers, and error types
//! that form the vocabulary of the contract domain.

mod errors;
mod locale_date;
mod money;
mod number_words;

pub use errors::ValidationError;
pub use locale_date::{format_date_br, format_long_date_br};
pub use money::Money;
pub use number_words::{decimal_to_words, format_decimal_br, integer_to_words, percentage_to_words};
