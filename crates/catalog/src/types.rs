//! Core domain types for the product catalog.
//!
//! This module defines the record type the filter engine is demonstrated
//! against. Key Rust concepts demonstrated here:
//! - Enums for fixed attribute sets
//! - Derive macros for common traits
//! - Display impls for human-readable attribute names

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Attribute Enums
// =============================================================================
// Fixed value sets for the two filterable product attributes. The serde
// wire form and Display output both use the lowercase attribute names.

/// Color of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// Size of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry.
///
/// Products are read-only from the filter engine's perspective: a filter
/// pass never mutates the items it inspects, it only selects among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name (e.g. "Apple")
    pub name: String,
    /// The color attribute specifications can test
    pub color: Color,
    /// The size attribute specifications can test
    pub size: Size,
}

impl Product {
    /// Create a new Product.
    ///
    /// # Arguments
    /// * `name` - Display name of the product
    /// * `color` - Color attribute
    /// * `size` - Size attribute
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}
