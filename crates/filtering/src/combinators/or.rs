//! Disjunction of two specifications.

use crate::traits::Specification;
use std::sync::Arc;

/// Satisfied when either operand is satisfied.
///
/// Like the conjunction, operands are shared `Arc`s and the composite
/// is itself a `Specification<T>`, so disjunctions nest to any depth.
pub struct OrSpecification<T> {
    left: Arc<dyn Specification<T>>,
    right: Arc<dyn Specification<T>>,
}

impl<T> OrSpecification<T> {
    /// Create a new OrSpecification from two shared operands.
    pub fn new(left: Arc<dyn Specification<T>>, right: Arc<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    /// Short-circuits: the right operand is not consulted when the left
    /// operand already succeeded.
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) || self.right.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} OR {})", self.left.describe(), self.right.describe())
    }
}
