//! Output publishing.
//!
//! In [`PublishMode::Staged`] the bundle is assembled in a temporary
//! directory next to the output directory and renamed into place once every
//! step has succeeded; a failed run leaves the previous output untouched.
//! [`PublishMode::InPlace`] resets the output directory up front and writes
//! into it directly.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use tracing::{debug, warn};

/// How the assembled bundle reaches the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublishMode {
    /// Assemble in a sibling staging directory, then rename into place.
    #[default]
    Staged,
    /// Delete and recreate the output directory, then assemble into it.
    InPlace,
}

/// Directory the assembly steps write into.
#[derive(Debug)]
pub struct BundleTarget {
    root: PathBuf,
    // Removed on drop, taking any unpublished bundle with it.
    staging: Option<TempDir>,
}

impl BundleTarget {
    /// Prepare a target for `out_dir`.
    pub fn prepare(out_dir: &Path, mode: PublishMode) -> std::io::Result<Self> {
        match mode {
            PublishMode::InPlace => {
                reset_dir(out_dir)?;
                Ok(Self {
                    root: out_dir.to_path_buf(),
                    staging: None,
                })
            }
            PublishMode::Staged => {
                let parent = match out_dir.parent() {
                    Some(p) if !p.as_os_str().is_empty() => p,
                    _ => Path::new("."),
                };
                fs::create_dir_all(parent)?;

                // Same parent keeps the final rename on one filesystem.
                let staging = tempfile::Builder::new()
                    .prefix(".sitebundle-staging-")
                    .tempdir_in(parent)?;
                let root = staging.path().join("bundle");
                fs::create_dir(&root)?;

                debug!(staging = %root.display(), "assembling in staging directory");
                Ok(Self {
                    root,
                    staging: Some(staging),
                })
            }
        }
    }

    /// Where the assembly steps write.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Move the assembled bundle to `out_dir`.
    pub fn publish(self, out_dir: &Path) -> std::io::Result<()> {
        let Some(staging) = self.staging else {
            return Ok(());
        };

        let previous = staging.path().join("previous");
        let had_previous = out_dir.exists();
        if had_previous {
            fs::rename(out_dir, &previous)?;
        }

        if let Err(err) = fs::rename(&self.root, out_dir) {
            if had_previous {
                if let Err(restore) = fs::rename(&previous, out_dir) {
                    warn!(
                        error = %restore,
                        path = %out_dir.display(),
                        "failed to restore previous output"
                    );
                }
            }
            return Err(err);
        }

        debug!(path = %out_dir.display(), "published bundle");
        Ok(())
    }
}

/// Remove `path` if it exists, then create it empty.
pub fn reset_dir(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        debug!(dir = %path.display(), "cleaning output directory");
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)
}
