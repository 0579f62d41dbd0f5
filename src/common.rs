
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use crate::error::PermutationError;

/// Input length past which collecting every permutation stops being practical.
///
/// The number of results grows as `n!`, so 10 characters already means 3,628,800 strings
/// held in memory at once.  Nothing in the library enforces this; it's a hint for callers.
pub const PRACTICAL_INPUT_LIMIT: usize = 10;

/// Returns a new Vec holding only the first occurrence of each distinct element
///
/// The relative order of first occurrences is preserved, so this is a stable filter, not a sort.
/// Equality is exact: for strings that means case-sensitive, scalar-for-scalar comparison.
pub fn dedupe<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {

    let mut seen: HashSet<T> = HashSet::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}

/// Returns `n!`, or `None` if it doesn't fit in `N`
pub fn factorial<N>(n: usize) -> Option<N>
    where
    N: num_traits::PrimInt,
{
    let mut result = N::one();
    for k in 2..=n {
        result = result.checked_mul(&N::from(k)?)?;
    }
    Some(result)
}

/// Returns the number of distinct arrangements of the characters in `input`
///
/// This is the multinomial coefficient `n! / (m1! * m2! * ...)` where each `mi` is the number of
/// times a character repeats.  It's computed as a running product of binomials, so intermediate
/// values never exceed the final result by more than a factor of `n`.
pub fn distinct_permutation_count<N>(input: &str) -> Option<N>
    where
    N: num_traits::PrimInt,
{
    let mut multiplicities: BTreeMap<char, usize> = BTreeMap::new();
    for c in input.chars() {
        *multiplicities.entry(c).or_insert(0) += 1;
    }

    let mut result = N::one();
    let mut placed = 0;
    for &m in multiplicities.values() {
        //Choose m of the (placed + m) slots for this character, one factor at a time
        for j in 1..=m {
            placed += 1;
            result = result.checked_mul(&N::from(placed)?)? / N::from(j)?;
        }
    }
    Some(result)
}

/// Turns an absent input into the error both generators report
pub(crate) fn require_input(input: Option<&str>) -> Result<&str, PermutationError> {
    input.ok_or(PermutationError::NullInput)
}

/// Applies the duplicate-handling policy shared by both generators
pub(crate) fn finish_results(results: Vec<String>, allow_duplicates: bool) -> Vec<String> {
    if allow_duplicates {
        results
    } else {
        dedupe(results)
    }
}
