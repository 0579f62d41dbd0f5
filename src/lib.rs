#![crate_name = "string_permutations"]

#![doc = include_str!("../README.md")]

mod common;
pub use common::{dedupe, distinct_permutation_count, factorial, PRACTICAL_INPUT_LIMIT};

mod error;
pub use error::{PermutationError, ReportError, SearchError};

mod recursive_permutations;
pub use recursive_permutations::{generate_recursive, permute_recursive};

mod heap_permutation_iter;
pub use heap_permutation_iter::{generate_iterative, HeapPermutationIter};

mod file_search;
pub use file_search::{count_matches, find_matches, search_files, CaseSensitivity, FileCount};

pub mod logger;

mod report;
pub use report::{parse_flag, write_file_counts, write_permutation_report, write_permutations, write_search_report, EMPTY_INPUT_MESSAGE, NOT_A_DIRECTORY_MESSAGE};


#[cfg(test)]
mod random_strings;
