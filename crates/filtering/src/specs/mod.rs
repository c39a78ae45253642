//! Leaf predicates over the product catalog.
//!
//! This module contains the concrete attribute predicates. Each one is
//! a plain `Specification<Product>`, so it can be nested inside any
//! combinator without special treatment.

pub mod color;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use size::SizeSpecification;
