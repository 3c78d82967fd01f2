//! Raw output acquisition: a named file or the whole of stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_file(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read everything from `reader` (stdin in production). Empty input is fine.
pub fn read_all<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(InputError::Stdin)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_stdin() -> Result<String, InputError> {
    read_all(io::stdin().lock())
}
