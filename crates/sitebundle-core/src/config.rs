//! Site configuration management.
//!
//! The locale list, default locale and source/output paths are defined here
//! once. Both the framework export ([`crate::framework`]) and the assembler
//! read them from the same [`Config`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    locale::LocaleSet,
};

/// Redirect status codes accepted for the root redirect rule.
pub const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// Main configuration structure for sitebundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale settings.
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Source and output paths.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Root redirect settings.
    #[serde(default)]
    pub redirect: RedirectConfig,

    /// Settings exported to the web framework.
    #[serde(default)]
    pub framework: FrameworkConfig,
}

/// Locale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Supported locales, in assembly order.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,

    /// Locale the bundle root redirects to.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

/// Path configuration, relative to the working directory unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Output directory for the assembled bundle.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Root of the framework build output.
    #[serde(default = "default_next_dir")]
    pub next_dir: PathBuf,

    /// Public assets copied to the bundle root.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

/// Root redirect configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// HTTP status for `/ -> /<default_locale>/`.
    #[serde(default = "default_redirect_status")]
    pub status: u16,
}

/// Framework settings that are not locale related.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Emit routes with a trailing slash (`/en/about/`).
    #[serde(default = "default_true")]
    pub trailing_slash: bool,

    /// Serve images as-is; static hosts have no image optimizer.
    #[serde(default = "default_true")]
    pub unoptimized_images: bool,
}

// Default value functions
fn default_locales() -> Vec<String> {
    vec!["ja".to_string(), "en".to_string(), "zh-Hant".to_string()]
}

fn default_locale() -> String {
    "ja".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_next_dir() -> PathBuf {
    PathBuf::from(".next")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_redirect_status() -> u16 {
    302
}

fn default_true() -> bool {
    true
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            default_locale: default_locale(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            next_dir: default_next_dir(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            status: default_redirect_status(),
        }
    }
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            trailing_slash: true,
            unoptimized_images: true,
        }
    }
}

/// Environment layer: `SITEBUNDLE__PATHS__OUT_DIR=dist`,
/// `SITEBUNDLE__I18N__LOCALES=ja,en,zh-Hant`.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("SITEBUNDLE")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("i18n.locales")
}

impl PathsConfig {
    /// Directory holding the pre-rendered pages (`<next_dir>/server/pages`).
    #[must_use]
    pub fn pages_dir(&self) -> PathBuf {
        self.next_dir.join("server").join("pages")
    }

    /// Compiled script and style chunks (`<next_dir>/static`).
    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        self.next_dir.join("static")
    }

    /// File holding the current build identifier (`<next_dir>/BUILD_ID`).
    #[must_use]
    pub fn build_id_file(&self) -> PathBuf {
        self.next_dir.join("BUILD_ID")
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `SITEBUNDLE__SECTION__KEY` variables override the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Self::load_layered(path, true, env_source())
    }

    /// Like [`Config::load_with_env`], but a missing file falls back to the
    /// built-in defaults. Environment overrides still apply.
    pub fn load_or_default_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, false, env_source())
    }

    fn load_layered(path: &Path, required: bool, env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(required))
            .add_source(env)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.locale_set()?;

        if !REDIRECT_STATUSES.contains(&self.redirect.status) {
            return Err(CoreError::config(format!(
                "redirect.status must be one of {REDIRECT_STATUSES:?}, got {}",
                self.redirect.status
            )));
        }

        for (key, value) in [
            ("paths.out_dir", &self.paths.out_dir),
            ("paths.next_dir", &self.paths.next_dir),
            ("paths.public_dir", &self.paths.public_dir),
        ] {
            if value.as_os_str().is_empty() {
                return Err(CoreError::config(format!("{key} cannot be empty")));
            }
        }

        // Browsers cache 301/308 indefinitely.
        if matches!(self.redirect.status, 301 | 308) {
            tracing::warn!(
                status = self.redirect.status,
                "permanent root redirect: changing i18n.default_locale later will not reach returning visitors"
            );
        }

        Ok(())
    }

    /// The validated set of supported locales.
    pub fn locale_set(&self) -> Result<LocaleSet> {
        LocaleSet::new(self.i18n.locales.iter().cloned(), &self.i18n.default_locale)
    }
}
