//! Core extraction pass and its error type

mod error;
mod extractor;

pub use error::ExtractError;
pub use extractor::run;
