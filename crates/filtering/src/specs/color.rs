//! Predicate on a product's color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products of one particular color.
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    /// Create a new ColorSpecification.
    ///
    /// # Arguments
    /// * `color` - The color a product must have to satisfy this predicate
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }

    fn describe(&self) -> String {
        format!("color == {}", self.color)
    }
}
