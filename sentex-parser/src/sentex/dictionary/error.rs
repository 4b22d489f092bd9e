//! Error types for dictionary loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary file {} not found", .path.display())]
    Missing { path: PathBuf },

    #[error("could not read dictionary file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line without exactly two whitespace-separated fields. Lines are 1-based.
    #[error("malformed dictionary line {line}: {content:?} (expected `<word> <CLASS>`)")]
    Malformed { line: usize, content: String },

    #[error("unknown word class {tag:?} on dictionary line {line}")]
    UnknownClass { line: usize, tag: String },
}
