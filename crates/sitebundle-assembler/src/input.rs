//! Input declarations.
//!
//! Every path the assembler reads is declared [`InputPolicy::Required`] or
//! [`InputPolicy::Optional`]. A missing required input stops the run with a
//! named error; a missing optional input is logged and skipped.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

/// Input errors.
#[derive(Debug, Error)]
pub enum InputError {
    /// A required input does not exist.
    #[error("required input '{name}' not found: {}", .path.display())]
    Missing { name: String, path: PathBuf },
}

/// Whether an input must exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// Absence aborts the run.
    Required,
    /// Absence is logged and the dependent step is skipped.
    Optional,
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Optional => f.write_str("optional"),
        }
    }
}

/// A named input path with its policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub path: PathBuf,
    pub policy: InputPolicy,
}

impl Input {
    /// Declare a required input.
    pub fn required(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            policy: InputPolicy::Required,
        }
    }

    /// Declare an optional input.
    pub fn optional(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            policy: InputPolicy::Optional,
        }
    }

    /// Whether the input is present on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Apply the policy: the path if present, `None` for a missing optional
    /// input, an error for a missing required one.
    pub fn resolve(&self) -> Result<Option<&Path>, InputError> {
        if self.exists() {
            return Ok(Some(&self.path));
        }

        match self.policy {
            InputPolicy::Required => Err(InputError::Missing {
                name: self.name.clone(),
                path: self.path.clone(),
            }),
            InputPolicy::Optional => {
                info!(
                    input = %self.name,
                    path = %self.path.display(),
                    "optional input missing, skipping"
                );
                Ok(None)
            }
        }
    }
}
