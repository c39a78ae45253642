//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Error messages with context

use thiserror::Error;

/// Errors that can occur while parsing catalog data
///
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` based on our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A field had a value outside its enumeration (e.g. an unknown color)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A product line had the wrong number of `::`-separated fields
    #[error("Expected {expected} fields but found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// A line in a catalog listing couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },
}

/// Convenience type alias for Results in this crate
///
/// Instead of writing `Result<T, CatalogError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, CatalogError>;
