//! Negation of a specification.

use crate::traits::Specification;
use std::sync::Arc;

/// Satisfied exactly when the inner specification is not.
pub struct NotSpecification<T> {
    inner: Arc<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    /// Create a new NotSpecification around a shared operand.
    pub fn new(inner: Arc<dyn Specification<T>>) -> Self {
        Self { inner }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::ColorSpecification;
    use catalog::{Color, Product, Size};

    #[test]
    fn test_not_specification() {
        let spec = NotSpecification::new(Arc::new(ColorSpecification::new(Color::Green)));

        let apple = Product::new("Apple", Color::Green, Size::Small);
        let house = Product::new("House", Color::Blue, Size::Large);

        assert!(!spec.is_satisfied(&apple));
        assert!(spec.is_satisfied(&house));
    }

    #[test]
    fn test_double_negation() {
        let spec = NotSpecification::new(Arc::new(NotSpecification::new(Arc::new(
            ColorSpecification::new(Color::Green),
        ))));

        let apple = Product::new("Apple", Color::Green, Size::Small);
        let house = Product::new("House", Color::Blue, Size::Large);

        // NOT NOT p behaves exactly like p
        assert!(spec.is_satisfied(&apple));
        assert!(!spec.is_satisfied(&house));
    }

    #[test]
    fn test_describe() {
        let spec = NotSpecification::new(Arc::new(ColorSpecification::new(Color::Red)));
        assert_eq!(spec.describe(), "NOT color == red");
    }
}
