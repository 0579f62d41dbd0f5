
use core::iter::FusedIterator;

use crate::common::*;
use crate::error::PermutationError;

/// An iterator over every arrangement of a sequence, produced by Heap's algorithm
///
/// Heap's algorithm walks all `n!` arrangements without recursion.  It keeps one mutable working
/// copy of the elements and one control counter per position.  Each step swaps exactly one pair
/// of elements, so consecutive results differ by a single transposition.
///
/// ## Algorithm Details
///
/// The identity arrangement is returned first.  After that, each step scans upward from position
/// 0 for the lowest position `i` whose counter is still below `i`.  Positions passed over on the
/// way have their counters reset to 0.  The element at `i` is then swapped with position 0 if `i`
/// is even, or with the position named by its counter if `i` is odd.  The counter is
/// incremented and the scan restarts from position 0 on the next step.  Iteration ends when the
/// scan runs off the end.
///
/// For `"abc"` the sequence is:
/// ```txt
/// abc
/// bac
/// cab
/// acb
/// bca
/// cba
/// ```
///
/// Every item is an owned snapshot of the working buffer, so results never alias each other.
///
#[derive(Debug, Clone)]
pub struct HeapPermutationIter<T> {

    /// The working arrangement, permuted in place
    items: Vec<T>,

    /// One counter per position; `counters[i]` never exceeds `i`
    counters: Vec<usize>,

    /// The position the next scan resumes from
    cursor: usize,

    /// The identity arrangement is emitted before any swap, so the first call is a special case
    new_iter: bool,

    /// Arrangements not yet returned, or `None` if `n!` overflowed a usize
    remaining: Option<usize>,
}

impl<T: Clone> HeapPermutationIter<T> {
    pub fn new(items: impl IntoIterator<Item=T>) -> Self {

        let items: Vec<T> = items.into_iter().collect();
        let len = items.len();

        Self {
            items,
            counters: vec![0; len],
            cursor: 0,
            new_iter: true,
            remaining: factorial(len),
        }
    }
    /// The number of elements being permuted
    pub fn element_count(&self) -> usize {
        self.items.len()
    }
    /// Arrangements not yet returned, or `None` if there are more than a usize can count
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }
    fn emit(&mut self) -> Vec<T> {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        self.items.clone()
    }
}

impl<T: Clone> Iterator for HeapPermutationIter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {

        if self.new_iter {
            self.new_iter = false;
            return Some(self.emit());
        }

        let len = self.items.len();
        while self.cursor < len {
            let i = self.cursor;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.cursor = 0;
                return Some(self.emit());
            }
            self.counters[i] = 0;
            self.cursor += 1;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for HeapPermutationIter<T> {}

/// Generates every permutation of `input` with Heap's algorithm
///
/// Produces the same set of `n!` strings as [generate_recursive](crate::generate_recursive), in the
/// order described on [HeapPermutationIter].  Pass `allow_duplicates = false` to keep only the
/// first occurrence of each string when `input` has repeated characters.
///
/// Returns [PermutationError::NullInput] if `input` is `None`.  An empty string yields a single
/// empty permutation.
pub fn generate_iterative(input: Option<&str>, allow_duplicates: bool) -> Result<Vec<String>, PermutationError> {

    let input = require_input(input)?;
    if input.is_empty() {
        return Ok(vec![String::new()]);
    }

    let results: Vec<String> = HeapPermutationIter::new(input.chars())
        .map(|arrangement| arrangement.into_iter().collect())
        .collect();

    tracing::debug!(input, generated = results.len(), allow_duplicates, "iterative permutations generated");
    Ok(finish_results(results, allow_duplicates))
}
