// ABOUTME: Error types for captionfix including the ErrorCode enum and FixError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;
use std::path::{Path, PathBuf};

/// Error codes representing the categories of failure while fixing captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidRoot,
    Read,
    Write,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidRoot => "not a directory",
            ErrorCode::Read => "read error",
            ErrorCode::Write => "write error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for caption fixing.
#[derive(Debug, thiserror::Error)]
pub struct FixError {
    pub code: ErrorCode,
    pub path: PathBuf,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "captionfix: {} {}: {}",
            self.op,
            self.path.display(),
            self.code
        )?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl FixError {
    /// Create an InvalidRoot error.
    pub fn invalid_root(path: impl AsRef<Path>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidRoot,
            path: path.as_ref().to_path_buf(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a Read error.
    pub fn read(
        path: impl AsRef<Path>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Read,
            path: path.as_ref().to_path_buf(),
            op: op.into(),
            source,
        }
    }

    /// Create a Write error.
    pub fn write(
        path: impl AsRef<Path>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Write,
            path: path.as_ref().to_path_buf(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if the root folder was missing or not a directory.
    pub fn is_invalid_root(&self) -> bool {
        self.code == ErrorCode::InvalidRoot
    }

    /// Returns true if this is a Read error.
    pub fn is_read(&self) -> bool {
        self.code == ErrorCode::Read
    }

    /// Returns true if this is a Write error.
    pub fn is_write(&self) -> bool {
        self.code == ErrorCode::Write
    }
}
