//! Parser for textual catalog listings.
//!
//! This module handles parsing catalog lines of the form:
//! - `name::color::size` (e.g. `Apple::green::small`)
//!
//! Rust concepts demonstrated here:
//! - The `FromStr` trait for parsing
//! - Error handling with the `?` operator
//! - String splitting and match-based enum parsing

use crate::error::{CatalogError, Result};
use crate::types::{Color, Product, Size};
use std::str::FromStr;

impl FromStr for Color {
    type Err = CatalogError;

    /// Parse a color from its lowercase attribute name
    ///
    /// Example: "green" -> Ok(Color::Green)
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    /// Parse a size from its lowercase attribute name
    ///
    /// Example: "large" -> Ok(Size::Large)
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Product {
    type Err = CatalogError;

    /// Parse a single catalog line
    ///
    /// Format: `name::color::size`. Fields are taken verbatim; the name
    /// may contain spaces but not the `::` separator.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split("::").collect();
        if parts.len() != 3 {
            return Err(CatalogError::FieldCountMismatch {
                expected: 3,
                found: parts.len(),
            });
        }

        let name = parts[0];
        if name.is_empty() {
            return Err(CatalogError::InvalidValue {
                field: "name".to_string(),
                value: name.to_string(),
            });
        }

        Ok(Product {
            name: name.to_string(),
            color: parts[1].parse()?,
            size: parts[2].parse()?,
        })
    }
}

/// Parse a multi-line catalog listing
///
/// One product per line, empty lines skipped. Any malformed line aborts
/// the parse with a `ParseError` carrying its 1-based line number.
pub fn parse_products(input: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    // Read line by line
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }

        let product = line_trimmed
            .parse::<Product>()
            .map_err(|e| CatalogError::ParseError {
                line: line_no,
                reason: e.to_string(),
            })?;

        products.push(product);
    }

    Ok(products)
}
