//! Composable boolean predicates and a generic filter over record
//! collections.
//!
//! This crate provides:
//! - Specification trait for predicates, plus the leaf predicates on
//!   product attributes
//! - And/Or/Not combinators that nest to arbitrary depth
//! - Filter trait and the LinearFilter single-pass implementation
//!
//! ## Architecture
//! Filtering is split along two axes that vary independently:
//! 1. Specifications decide whether one record qualifies
//! 2. Filters walk a collection and keep the qualifying records
//!
//! New predicates, new combinators and new record types are added by
//! implementing the traits; no existing type is ever edited for them.
//!
//! ## Example Usage
//! ```ignore
//! use filtering::{ColorSpecification, Filter, LinearFilter, SizeSpecification, SpecificationExt};
//! use catalog::{Color, Size};
//!
//! // green AND large
//! let spec = ColorSpecification::new(Color::Green)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! let filter = LinearFilter;
//! let refs: Vec<&Product> = products.iter().collect();
//! for product in filter.filter(refs, &spec) {
//!     println!("{} matches {}", product.name, spec.describe());
//! }
//! ```

pub mod combinators;
pub mod filter;
pub mod specs;
pub mod traits;

// Re-export main types
pub use combinators::{AndSpecification, NotSpecification, OrSpecification, SpecificationExt};
pub use filter::LinearFilter;
pub use specs::{ColorSpecification, SizeSpecification};
pub use traits::{Filter, Specification};
