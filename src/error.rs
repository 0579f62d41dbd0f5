
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the permutation generators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// The caller passed no input string at all, as opposed to an empty one
    #[error("Input string cannot be null")]
    NullInput,
}

/// Errors returned by [search_files](crate::search_files)
#[derive(Error, Debug)]
pub enum SearchError {
    /// The search root is missing or isn't a directory
    #[error("The specified directory does not exist or is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Errors that can interrupt writing a permutation report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    Permutation(#[from] PermutationError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
