//src/error.rs

use std::io;
use std::path::PathBuf;

/// A type alias for `Result<T, HistoneError>`.
pub type Result<T> = std::result::Result<T, HistoneError>;

/// Everything that can abort one of the tools.
#[derive(thiserror::Error, Debug)]
pub enum HistoneError {
    #[error("I/O error - {0}")]
    Io(#[from] io::Error),

    #[error("File '{}' does not exist.", .path.display())]
    MissingFile { path: PathBuf },

    #[error("No files with '_ids.txt' suffix found in '{}'.", .dir.display())]
    NoInputFiles { dir: PathBuf },

    /// A prefix mapping row without exactly two tab-separated columns.
    #[error(
        "Invalid format in {} at line {line}: expected exactly two tab-separated columns, found {fields}.",
        .path.display()
    )]
    InvalidMapping {
        path: PathBuf,
        line: usize,
        fields: usize,
    },

    #[error("line {line}: expected at least {expected} columns, found {found}")]
    TooFewColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected {expected} columns like the first data row, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: could not parse e-value '{value}'")]
    InvalidEValue { line: usize, value: String },
}

impl HistoneError {
    /// Turns a `NotFound` I/O error on `path` into `MissingFile`.
    pub(crate) fn from_open(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            HistoneError::MissingFile { path: path.into() }
        } else {
            HistoneError::Io(err)
        }
    }
}
