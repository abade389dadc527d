//! File and directory copy helpers.

use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Copy errors.
#[derive(Debug, Error)]
pub enum CopyError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Walked entry outside of the source root.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for copy operations.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Recursively copy `source_dir` into `dest_dir`, overwriting existing files.
///
/// Returns the number of files copied.
pub fn copy_tree(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(source_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|_| CopyError::InvalidPath(entry.path().to_path_buf()))?;
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            count += 1;
        }
    }

    debug!(
        src = %source_dir.display(),
        dest = %dest_dir.display(),
        count,
        "copied tree"
    );

    Ok(count)
}

/// Copy the regular files directly inside `source_dir` whose names satisfy
/// `keep` into `dest_dir`. Subdirectories are not descended into.
///
/// `dest_dir` is created even when nothing matches. Returns the copied file
/// names in sorted order. Names are matched as-is, so they need not be UTF-8.
pub fn copy_matching(
    source_dir: &Path,
    dest_dir: &Path,
    keep: impl Fn(&OsStr) -> bool,
) -> Result<Vec<OsString>> {
    fs::create_dir_all(dest_dir)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        if keep(name.as_os_str()) {
            names.push(name);
        }
    }
    names.sort();

    for name in &names {
        copy_file(&source_dir.join(name), &dest_dir.join(name))?;
    }

    Ok(names)
}

/// Copy a single file, creating the destination's parent directories.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)?;
    debug!(src = %source.display(), dest = %dest.display(), "copied file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_copy_tree_nested() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::create_dir_all(source.path().join("images/icons")).unwrap();
        fs::write(source.path().join("favicon.ico"), b"ico").unwrap();
        fs::write(source.path().join("images/icons/logo.svg"), b"<svg/>").unwrap();

        let count = copy_tree(source.path(), dest.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read(dest.path().join("favicon.ico")).unwrap(), b"ico");
        assert_eq!(
            fs::read(dest.path().join("images/icons/logo.svg")).unwrap(),
            b"<svg/>"
        );
    }

    #[test]
    fn test_copy_tree_keeps_hidden_files() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::create_dir_all(source.path().join(".well-known")).unwrap();
        fs::write(source.path().join(".well-known/security.txt"), b"x").unwrap();

        copy_tree(source.path(), dest.path()).unwrap();
        assert!(dest.path().join(".well-known/security.txt").exists());
    }

    #[test]
    fn test_copy_tree_overwrites() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::write(source.path().join("robots.txt"), b"new").unwrap();
        fs::write(dest.path().join("robots.txt"), b"old").unwrap();

        copy_tree(source.path(), dest.path()).unwrap();
        assert_eq!(fs::read(dest.path().join("robots.txt")).unwrap(), b"new");
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let dest = TempDir::new().unwrap();
        let result = copy_tree(&dest.path().join("missing"), dest.path());
        assert!(matches!(result, Err(CopyError::Walk(_))));
    }

    #[test]
    fn test_copy_matching_filters_and_skips_dirs() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::write(source.path().join("about.html"), b"a").unwrap();
        fs::write(source.path().join("about.json"), b"{}").unwrap();
        fs::write(source.path().join("about.nft.txt"), b"t").unwrap();
        fs::create_dir(source.path().join("blog.html")).unwrap();

        let out = dest.path().join("en");
        let is_html = |n: &OsStr| Path::new(n).extension().is_some_and(|e| e == "html");
        let names = copy_matching(source.path(), &out, is_html).unwrap();

        assert_eq!(names, vec!["about.html"]);
        assert!(out.join("about.html").exists());
        assert!(!out.join("about.json").exists());
        assert!(!out.join("blog.html").exists());
    }

    #[test]
    fn test_copy_matching_creates_empty_dest() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let out = dest.path().join("ja");
        let names = copy_matching(source.path(), &out, |_| true).unwrap();

        assert!(names.is_empty());
        assert!(out.is_dir());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_copy_matching_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let name = OsStr::from_bytes(b"caf\xe9.html");
        fs::write(source.path().join(name), b"menu").unwrap();

        let names = copy_matching(source.path(), dest.path(), |_| true).unwrap();

        assert_eq!(names, vec![name.to_os_string()]);
        assert_eq!(fs::read(dest.path().join(name)).unwrap(), b"menu");
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("ja.html");
        fs::write(&src, b"<html></html>").unwrap();

        let dest = dir.path().join("out/ja/index.html");
        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"<html></html>");
    }
}
