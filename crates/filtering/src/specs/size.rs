//! Predicate on a product's size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products of one particular size.
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    /// Create a new SizeSpecification.
    ///
    /// # Arguments
    /// * `size` - The size a product must have to satisfy this predicate
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }

    fn describe(&self) -> String {
        format!("size == {}", self.size)
    }
}
