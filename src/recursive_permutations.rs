
use crate::common::*;
use crate::error::PermutationError;

/// Generates every permutation of `input` by recursive character choice
///
/// For each character still remaining, the generator appends it to the prefix built so far and
/// recurses on the characters left over.  A complete prefix is one permutation.
///
/// Because the choice is by position rather than by value, repeated characters are picked as if
/// they were distinct, and the same string comes out more than once.  There are always exactly
/// `n!` results before deduplication.  Pass `allow_duplicates = false` to keep only the first
/// occurrence of each string.
///
/// Results come out in depth-first, left-to-right order, e.g. `"abc"` yields
/// `abc, acb, bac, bca, cab, cba`.
///
/// Returns [PermutationError::NullInput] if `input` is `None`.  An empty string is valid input
/// and yields a single empty permutation.
pub fn generate_recursive(input: Option<&str>, allow_duplicates: bool) -> Result<Vec<String>, PermutationError> {

    let input = require_input(input)?;
    if input.is_empty() {
        return Ok(vec![String::new()]);
    }

    let chars: Vec<char> = input.chars().collect();
    let results: Vec<String> = permute_recursive(&chars)
        .into_iter()
        .map(|permutation| permutation.into_iter().collect())
        .collect();

    tracing::debug!(input, generated = results.len(), allow_duplicates, "recursive permutations generated");
    Ok(finish_results(results, allow_duplicates))
}

/// Generic core of [generate_recursive], over any cloneable element type
///
/// Returns all `n!` arrangements of `items` in depth-first, left-to-right choice order.  An empty
/// slice has exactly one arrangement, the empty one.
pub fn permute_recursive<T: Clone>(items: &[T]) -> Vec<Vec<T>> {

    let mut results = Vec::with_capacity(factorial::<usize>(items.len()).unwrap_or(0));
    let mut prefix = Vec::with_capacity(items.len());
    let mut remaining = items.to_vec();
    permute_into(&mut prefix, &mut remaining, &mut results);
    results
}

fn permute_into<T: Clone>(prefix: &mut Vec<T>, remaining: &mut Vec<T>, results: &mut Vec<Vec<T>>) {

    if remaining.is_empty() {
        results.push(prefix.clone());
        return;
    }

    for i in 0..remaining.len() {
        //Take the i-th element out, recurse, then put it back where it was so the
        // remaining elements keep their relative order for the next pick
        let item = remaining.remove(i);
        prefix.push(item);
        permute_into(prefix, remaining, results);
        if let Some(item) = prefix.pop() {
            remaining.insert(i, item);
        }
    }
}
