//! Combinators for composing specifications.
//!
//! This module contains the boolean composites. Each one is a
//! `Specification<T>` in its own right, so arbitrary predicate trees
//! can be built without changing any existing type.

pub mod and;
pub mod not;
pub mod or;

// Re-export for convenience
pub use and::AndSpecification;
pub use not::NotSpecification;
pub use or::OrSpecification;

use crate::traits::Specification;
use std::sync::Arc;

/// Builder-style composition, implemented for every specification.
///
/// Each method consumes its operands, wraps them in `Arc`s and returns
/// the concrete composite, so calls chain naturally:
///
/// ```ignore
/// let spec = ColorSpecification::new(Color::Green)
///     .and(SizeSpecification::new(Size::Large));
/// ```
pub trait SpecificationExt<T>: Specification<T> {
    /// Conjunction: satisfied when both `self` and `other` are.
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
        T: 'static,
    {
        AndSpecification::new(Arc::new(self), Arc::new(other))
    }

    /// Disjunction: satisfied when either `self` or `other` is.
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
        T: 'static,
    {
        OrSpecification::new(Arc::new(self), Arc::new(other))
    }

    /// Negation: satisfied exactly when `self` is not.
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
        T: 'static,
    {
        NotSpecification::new(Arc::new(self))
    }
}

impl<T, S> SpecificationExt<T> for S where S: Specification<T> {}
