//! The LinearFilter walks a collection once against a specification.
//!
//! This module provides the default `Filter` implementation: a single
//! sequential pass that keeps the records satisfying the predicate.

use crate::traits::{Filter, Specification};
use tracing;

/// Filters a collection with one sequential pass.
///
/// The filter only talks to the `Specification` trait, so new
/// predicates and new combinators never require a change here.
///
/// ## Usage
/// ```ignore
/// let filter = LinearFilter;
/// let spec = ColorSpecification::new(Color::Green);
///
/// let refs: Vec<&Product> = products.iter().collect();
/// let green = filter.filter(refs, &spec);
/// ```
pub struct LinearFilter;

impl<T> Filter<T> for LinearFilter {
    /// ## Algorithm
    /// 1. Log the specification and input count
    /// 2. Keep each reference whose record satisfies the specification,
    ///    preserving input order
    /// 3. Log the output count
    fn filter<'a>(&self, items: Vec<&'a T>, spec: &dyn Specification<T>) -> Vec<&'a T> {
        tracing::debug!(
            "Applying specification: {} (input count: {})",
            spec.describe(),
            items.len()
        );

        let kept: Vec<&'a T> = items
            .into_iter()
            .filter(|&item| spec.is_satisfied(item))
            .collect();

        tracing::debug!(
            "Specification applied: {} (output count: {})",
            spec.describe(),
            kept.len()
        );

        kept
    }
}
