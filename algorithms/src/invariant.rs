//! Checkable postconditions for kernel outputs.

use std::collections::HashMap;
use std::hash::Hash;

/// Defines invariants a kernel result must satisfy
pub trait Invariant<T: ?Sized> {
    /// Checks if a value satisfies the invariant
    fn check(&self, value: &T) -> bool;
}

/// Value must be non-negative
pub struct NonNegative;

impl Invariant<i64> for NonNegative {
    fn check(&self, value: &i64) -> bool {
        *value >= 0
    }
}

/// A sequence must be sorted in non-decreasing order
pub struct Sorted;

impl<T: Ord> Invariant<[T]> for Sorted {
    fn check(&self, value: &[T]) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T: Ord> Invariant<Vec<T>> for Sorted {
    fn check(&self, value: &Vec<T>) -> bool {
        Invariant::<[T]>::check(self, value.as_slice())
    }
}

/// A sequence must hold exactly the multiset of a reference sequence.
pub struct PermutationOf<T> {
    counts: HashMap<T, usize>,
    len: usize,
}

impl<T: Hash + Eq + Clone> PermutationOf<T> {
    pub fn new(reference: &[T]) -> Self {
        Self {
            counts: multiset(reference),
            len: reference.len(),
        }
    }
}

fn multiset<T: Hash + Eq + Clone>(values: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for v in values {
        *counts.entry(v.clone()).or_insert(0) += 1;
    }
    counts
}

impl<T: Hash + Eq + Clone> Invariant<[T]> for PermutationOf<T> {
    fn check(&self, value: &[T]) -> bool {
        value.len() == self.len && multiset(value) == self.counts
    }
}

impl<T: Hash + Eq + Clone> Invariant<Vec<T>> for PermutationOf<T> {
    fn check(&self, value: &Vec<T>) -> bool {
        Invariant::<[T]>::check(self, value.as_slice())
    }
}
