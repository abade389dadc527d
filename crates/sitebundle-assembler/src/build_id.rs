//! Build identifier.
//!
//! The framework writes an opaque token to `BUILD_ID`; client navigation
//! requests data from `/_next/data/<build id>/`, so the token becomes a
//! directory name in the bundle.

use std::{fmt, fs, path::Path};

use thiserror::Error;

/// Build identifier errors.
#[derive(Debug, Error)]
pub enum BuildIdError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The identifier cannot be used as a directory name.
    #[error("invalid build id {0:?}")]
    Invalid(String),
}

/// Trimmed build identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildId(String);

impl BuildId {
    /// Parse a raw identifier, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, BuildIdError> {
        let id = raw.trim();
        if id.is_empty() || id == "." || id.contains("..") || id.contains(['/', '\\']) {
            return Err(BuildIdError::Invalid(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// Read and parse the identifier file.
    pub fn read(path: &Path) -> Result<Self, BuildIdError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
