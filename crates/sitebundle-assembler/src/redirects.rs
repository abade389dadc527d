//! `_redirects` rule file.
//!
//! One rule per line, `<from> <to> <status>`, in the format static hosts
//! such as Cloudflare Pages read from the bundle root.

use std::{fmt, fs::File, io::Write, path::Path};

use tracing::info;

/// File name of the rule file at the bundle root.
pub const REDIRECTS_FILE: &str = "_redirects";

/// A single redirect rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    pub status: u16,
}

impl RedirectRule {
    /// Redirect the bundle root to `/<locale>/`.
    #[must_use]
    pub fn root_to_locale(locale: &str, status: u16) -> Self {
        Self {
            from: "/".to_string(),
            to: format!("/{locale}/"),
            status,
        }
    }
}

impl fmt::Display for RedirectRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.status)
    }
}

/// Write `rules` to `<out_dir>/_redirects`, replacing any previous file.
pub fn write_redirects(out_dir: &Path, rules: &[RedirectRule]) -> std::io::Result<()> {
    let path = out_dir.join(REDIRECTS_FILE);
    let mut file = File::create(&path)?;

    for rule in rules {
        writeln!(file, "{rule}")?;
    }

    info!(path = %path.display(), rules = rules.len(), "wrote redirects");
    Ok(())
}
