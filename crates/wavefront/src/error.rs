//! Error types for mesh and material loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal loader failures. Only I/O can fail; malformed file content
/// degrades in place and is reported through logging instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read mesh data: {0}")]
    Read(#[source] io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
