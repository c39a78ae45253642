//! # Catalog Crate
//!
//! This crate defines the product catalog: the record type that the
//! filtering crate runs predicates over, plus a small parser for loading
//! catalogs from textual listings.
//!
//! ## Main Components
//!
//! - `types`: The `Product` record and its `Color` / `Size` attributes
//! - `parser`: `FromStr` implementations and `parse_products` for
//!   `name::color::size` listings
//! - `error`: Error types for catalog parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_products, Color, Product, Size};
//!
//! let products = parse_products("Apple::green::small\nTree::green::large")?;
//! assert_eq!(products[0], Product::new("Apple", Color::Green, Size::Small));
//! ```

pub mod error;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use error::{CatalogError, Result};
pub use parser::parse_products;
pub use types::{Color, Product, Size};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_roundtrip() {
        let products = parse_products("Lamp::red::medium").unwrap();
        assert_eq!(products, vec![Product::new("Lamp", Color::Red, Size::Medium)]);
    }
}
