//! Conjunction of two specifications.

use crate::traits::Specification;
use std::sync::Arc;

/// Satisfied only when both operands are satisfied.
///
/// Operands are shared `Arc`s, so the same predicate instance can sit
/// inside several composites at once. Since the result is itself a
/// `Specification<T>`, conjunctions nest to any depth.
pub struct AndSpecification<T> {
    left: Arc<dyn Specification<T>>,
    right: Arc<dyn Specification<T>>,
}

impl<T> AndSpecification<T> {
    /// Create a new AndSpecification from two shared operands.
    pub fn new(left: Arc<dyn Specification<T>>, right: Arc<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    /// Short-circuits: the right operand is not consulted when the left
    /// operand already failed.
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) && self.right.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.left.describe(), self.right.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ColorSpecification, SizeSpecification};
    use catalog::{Color, Product, Size};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_and_specification() {
        let spec = AndSpecification::new(
            Arc::new(ColorSpecification::new(Color::Green)),
            Arc::new(SizeSpecification::new(Size::Large)),
        );

        let tree = Product::new("Tree", Color::Green, Size::Large);
        let apple = Product::new("Apple", Color::Green, Size::Small);
        let house = Product::new("House", Color::Blue, Size::Large);

        assert!(spec.is_satisfied(&tree));
        assert!(!spec.is_satisfied(&apple));
        assert!(!spec.is_satisfied(&house));
    }

    #[test]
    fn test_describe() {
        let spec = AndSpecification::new(
            Arc::new(ColorSpecification::new(Color::Blue)),
            Arc::new(SizeSpecification::new(Size::Large)),
        );

        assert_eq!(spec.describe(), "(color == blue AND size == large)");
    }

    #[test]
    fn test_and_short_circuits() {
        struct Probe {
            calls: Arc<AtomicUsize>,
        }

        impl Specification<Product> for Probe {
            fn is_satisfied(&self, _item: &Product) -> bool {
                self.calls.fetch_add(1, Ordering::SeqCst);
                true
            }

            fn describe(&self) -> String {
                "probe".to_string()
            }
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let spec = AndSpecification::new(
            Arc::new(ColorSpecification::new(Color::Green)),
            Arc::new(Probe {
                calls: calls.clone(),
            }),
        );

        // Left operand fails, right operand must never run
        let house = Product::new("House", Color::Blue, Size::Large);
        assert!(!spec.is_satisfied(&house));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
