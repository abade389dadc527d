//! Framework settings export.
//!
//! Renders the subset of the web framework configuration that sitebundle
//! owns (`i18n`, `trailingSlash`, `images.unoptimized`) as JSON, so the
//! framework config can import it instead of repeating the locale list.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{config::Config, error::Result};

/// Framework-facing settings, serialized in the framework's camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSettings {
    pub i18n: I18nSettings,
    pub trailing_slash: bool,
    pub images: ImageSettings,
}

/// Locale block of the framework config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nSettings {
    pub locales: Vec<String>,
    pub default_locale: String,
}

/// Image block of the framework config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSettings {
    pub unoptimized: bool,
}

impl FrameworkSettings {
    /// Derive framework settings from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let locales = config.locale_set()?;
        Ok(Self {
            i18n: I18nSettings {
                locales: locales.as_slice().to_vec(),
                default_locale: locales.default_locale().to_string(),
            },
            trailing_slash: config.framework.trailing_slash,
            images: ImageSettings {
                unoptimized: config.framework.unoptimized_images,
            },
        })
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the JSON export to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "wrote framework settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let settings = FrameworkSettings::from_config(&Config::default()).unwrap();
        assert_eq!(settings.i18n.locales, vec!["ja", "en", "zh-Hant"]);
        assert_eq!(settings.i18n.default_locale, "ja");
        assert!(settings.trailing_slash);
        assert!(settings.images.unoptimized);
    }

    #[test]
    fn test_json_uses_framework_keys() {
        let settings = FrameworkSettings::from_config(&Config::default()).unwrap();
        let json = settings.to_json().unwrap();

        assert!(json.contains(r#""defaultLocale": "ja""#));
        assert!(json.contains(r#""trailingSlash": true"#));
        assert!(json.contains(r#""unoptimized": true"#));
        assert!(json.ends_with('\n'));

        let parsed: FrameworkSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_invalid_locales_rejected() {
        let mut config = Config::default();
        config.i18n.default_locale = "fr".to_string();
        assert!(FrameworkSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_write_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/i18n.json");

        let settings = FrameworkSettings::from_config(&Config::default()).unwrap();
        settings.write(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, settings.to_json().unwrap());
    }
}
