//! Supported locales.
//!
//! A [`LocaleSet`] is the ordered list of language tags the site ships,
//! plus the one used as the landing redirect target. Tags double as
//! directory names in the output bundle, so they are checked for path
//! separators up front.

use std::collections::HashSet;

use crate::error::{CoreError, Result};

/// Ordered set of locale tags with a designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<String>,
    default_index: usize,
}

impl LocaleSet {
    /// Build a locale set, checking that `default` is one of `locales`.
    pub fn new<I, S>(locales: I, default: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();

        if locales.is_empty() {
            return Err(CoreError::locale("at least one locale must be configured"));
        }

        let mut seen = HashSet::new();
        for tag in &locales {
            validate_tag(tag)?;
            if !seen.insert(tag.as_str()) {
                return Err(CoreError::locale(format!("duplicate locale '{tag}'")));
            }
        }

        let default_index = locales
            .iter()
            .position(|tag| tag == default)
            .ok_or_else(|| {
                CoreError::locale(format!(
                    "default locale '{default}' is not one of the supported locales [{}]",
                    locales.join(", ")
                ))
            })?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// The default locale tag.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.locales[self.default_index]
    }

    /// Whether `tag` is a supported locale.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.locales.iter().any(|l| l == tag)
    }

    /// Iterate over locale tags in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    /// All locale tags in configured order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }

    /// Number of supported locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(CoreError::locale("locale tags cannot be empty"));
    }
    if tag != tag.trim() {
        return Err(CoreError::locale(format!(
            "locale '{tag}' has surrounding whitespace"
        )));
    }
    if tag.contains('/') || tag.contains('\\') || tag == "." || tag == ".." {
        return Err(CoreError::locale(format!(
            "locale '{tag}' cannot be used as a directory name"
        )));
    }
    Ok(())
}
