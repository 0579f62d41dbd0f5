
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SearchError;

/// Whether letter case takes part in file-name comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Returns `true` if `candidate` names the same file as `wanted` under this policy
    pub fn matches(&self, candidate: &str, wanted: &str) -> bool {
        match self {
            Self::Sensitive => candidate == wanted,
            Self::Insensitive => candidate == wanted || candidate.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

/// The entries found for one requested file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub file_name: String,
    pub count: usize,

    /// Every matching path, in walk order
    pub paths: Vec<PathBuf>,
}

/// Returns every non-directory entry under `root` whose name matches `file_name`
///
/// The walk is depth-first and doesn't follow symbolic links.  `root` itself is never a
/// candidate, only the entries beneath it.  Entries that can't be read are skipped with a
/// warning; a root that doesn't exist just produces nothing.
pub fn find_matches(root: &Path, file_name: &str, case: CaseSensitivity) -> Vec<PathBuf> {

    let mut matches = vec![];
    for entry_result in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if case.matches(&entry.file_name().to_string_lossy(), file_name) {
            tracing::info!(path = %entry.path().display(), "file found");
            matches.push(entry.into_path());
        }
    }
    matches
}

/// Counts the non-directory entries under `root` whose name matches `file_name`
///
/// A `None` root, a root that doesn't exist, and a root that isn't a directory all count as zero
/// matches rather than an error.  Use [search_files] when a bad root should be reported.
pub fn count_matches(root: Option<&Path>, file_name: &str, case: CaseSensitivity) -> usize {

    let root = match root {
        Some(root) if root.is_dir() => root,
        _ => return 0,
    };

    find_matches(root, file_name, case).len()
}

/// Counts matches for each of `file_names` under `root`, in request order
///
/// Unlike [count_matches], this checks the root first and returns
/// [SearchError::NotADirectory] if it's missing or not a directory.
pub fn search_files(root: &Path, file_names: &[String], case: CaseSensitivity) -> Result<Vec<FileCount>, SearchError> {

    if !root.is_dir() {
        return Err(SearchError::NotADirectory(root.to_path_buf()));
    }

    let counts = file_names.iter()
        .map(|file_name| {
            let paths = find_matches(root, file_name, case);
            FileCount {
                file_name: file_name.clone(),
                count: paths.len(),
                paths,
            }
        })
        .collect();

    Ok(counts)
}
