
use std::io::{self, Write};
use std::path::Path;

use crate::common::PRACTICAL_INPUT_LIMIT;
use crate::error::{ReportError, SearchError};
use crate::file_search::{search_files, CaseSensitivity, FileCount};
use crate::heap_permutation_iter::generate_iterative;
use crate::recursive_permutations::generate_recursive;

pub const EMPTY_INPUT_MESSAGE: &str = "Error: Input string cannot be empty.";
pub const NOT_A_DIRECTORY_MESSAGE: &str = "Error: The specified directory does not exist or is not a directory.";

/// Reads a yes/no answer the way the permutation tool does: only a case-insensitive "true"
/// turns the flag on, anything else turns it off
pub fn parse_flag(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("true")
}

/// Writes one titled block of permutations followed by its total
///
/// ```txt
///
/// --- Recursive Permutations ---
/// ab
/// ba
/// Total recursive permutations: 2
/// ```
pub fn write_permutations(out: &mut impl Write, title: &str, results: &[String]) -> io::Result<()> {

    writeln!(out)?;
    writeln!(out, "--- {} Permutations ---", title)?;
    for permutation in results {
        writeln!(out, "{}", permutation)?;
    }
    writeln!(out, "Total {} permutations: {}", title.to_lowercase(), results.len())
}

/// Writes the full output of the permutation tool for `input`: the recursive block, then the
/// iterative block
///
/// An empty `input` writes [EMPTY_INPUT_MESSAGE] instead and generates nothing.
pub fn write_permutation_report(out: &mut impl Write, input: &str, allow_duplicates: bool) -> Result<(), ReportError> {

    if input.is_empty() {
        writeln!(out, "{}", EMPTY_INPUT_MESSAGE)?;
        return Ok(());
    }
    if input.chars().count() > PRACTICAL_INPUT_LIMIT {
        tracing::warn!(length = input.chars().count(), limit = PRACTICAL_INPUT_LIMIT, "input is long, output grows factorially");
    }

    let recursive_results = generate_recursive(Some(input), allow_duplicates)?;
    write_permutations(out, "Recursive", &recursive_results)?;

    let iterative_results = generate_iterative(Some(input), allow_duplicates)?;
    write_permutations(out, "Iterative", &iterative_results)?;

    Ok(())
}

/// Writes the per-name results of a search: every path found, then `<name>: <count>`, then
/// `File not found: <name>` when nothing matched
pub fn write_file_counts(out: &mut impl Write, counts: &[FileCount]) -> io::Result<()> {

    for file_count in counts {
        for path in file_count.paths.iter() {
            writeln!(out, "File found: {}", path.display())?;
        }
        writeln!(out, "{}: {}", file_count.file_name, file_count.count)?;
        if file_count.count == 0 {
            writeln!(out, "File not found: {}", file_count.file_name)?;
        }
    }
    Ok(())
}

/// Writes the full output of the file-search tool
///
/// A root that's missing or isn't a directory writes [NOT_A_DIRECTORY_MESSAGE] and searches nothing.
pub fn write_search_report(out: &mut impl Write, root: &Path, file_names: &[String], case: CaseSensitivity) -> io::Result<()> {

    match search_files(root, file_names, case) {
        Ok(counts) => write_file_counts(out, &counts),
        Err(err @ SearchError::NotADirectory(_)) => {
            tracing::debug!(error = %err, "search not started");
            writeln!(out, "{}", NOT_A_DIRECTORY_MESSAGE)
        }
    }
}
