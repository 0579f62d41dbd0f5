
use rand::prelude::*;
use rand_pcg::Pcg64;

const BRANCHING_FACTOR: usize = 26;  //26 letters in the alphabet

/// Makes a random lowercase string, used for testing
///
/// Letters are drawn from the first `active_letters` letters of the alphabet, so a small
/// `active_letters` produces lots of repeats, which is the interesting case for deduplication.
pub fn random_string(length: usize, active_letters: usize, rng: &mut Pcg64) -> String {

    let active_letters = active_letters.clamp(1, BRANCHING_FACTOR);
    (0..length)
        .map(|_| idx_to_char(rng.gen_range(0..active_letters)))
        .collect()
}

/// Makes a batch of random strings with lengths in `1..=max_length`
pub fn random_strings(count: usize, max_length: usize, active_letters: usize, rng: &mut Pcg64) -> Vec<String> {

    (0..count)
        .map(|_| {
            let length = rng.gen_range(1..=max_length);
            random_string(length, active_letters, rng)
        })
        .collect()
}

fn idx_to_char(idx: usize) -> char {
    char::from((idx + 97) as u8)
}
