//! Core traits for the specification engine.
//!
//! This module defines the Specification trait that allows composable,
//! extensible predicates, and the Filter trait for running a predicate
//! over a collection of records.

use std::sync::Arc;

/// Core trait for boolean predicates over records of type `T`.
///
/// Leaf predicates and composites alike implement this trait, so any
/// specification can be handed to any `Filter` and nested inside any
/// combinator.
///
/// ## Design Note
/// - `Send + Sync` allows specifications to be shared across threads
/// - `is_satisfied` takes `&self` and `&T`: evaluation never mutates the
///   specification or the record
/// - Composites hold their operands as `Arc<dyn Specification<T>>`, so a
///   specification never borrows from another one and can appear in
///   several composites at once
pub trait Specification<T>: Send + Sync {
    /// Decide whether a single record satisfies this predicate.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Returns a human-readable rendering of this predicate (for
    /// logging/debugging)
    fn describe(&self) -> String;
}

/// A shared specification is itself a specification.
///
/// This lets an `Arc`'d predicate be passed directly wherever a
/// specification is expected, without unwrapping.
impl<T, S> Specification<T> for Arc<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Core trait for filtering record collections.
///
/// A filter walks a collection once and keeps the records that satisfy
/// the given specification. New record types and new predicates require
/// no changes here: the filter only ever talks to the two traits.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the `Vec<&T>` and return a filtered Vec,
///   preserving record identity instead of cloning records
pub trait Filter<T>: Send + Sync {
    /// Apply a specification to a collection of records.
    ///
    /// # Arguments
    /// * `items` - References to the records to filter (takes ownership
    ///   of the Vec)
    /// * `spec` - The predicate each record is tested against
    ///
    /// # Returns
    /// The references whose records satisfied the specification, in
    /// their original order.
    fn filter<'a>(&self, items: Vec<&'a T>, spec: &dyn Specification<T>) -> Vec<&'a T>;
}
