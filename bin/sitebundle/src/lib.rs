//! Sitebundle CLI Library
//!
//! Command implementations for the `sitebundle` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (assemble, check, framework-config)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sitebundle::cmd;
//!
//! let config = sitebundle::load_config(Path::new("."), None).unwrap();
//! cmd::assemble::run(config, Path::new("."), &cmd::assemble::Overrides::default()).unwrap();
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;

// Re-export core types for convenience
pub use sitebundle_assembler::{Assembler, AssemblyStats, PublishMode};
pub use sitebundle_core::Config;

/// Configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sitebundle.toml";

/// Load configuration.
///
/// An explicit path must exist. Without one, `sitebundle.toml` under `root`
/// is read when present and the built-in defaults are used otherwise.
/// `SITEBUNDLE__*` environment variables apply in both cases.
pub fn load_config(root: &Path, path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_with_env(path)
            .wrap_err_with(|| format!("Failed to load configuration from {}", path.display()));
    }

    let default = root.join(DEFAULT_CONFIG_FILE);
    if !default.exists() {
        tracing::info!(
            root = %root.display(),
            "no {DEFAULT_CONFIG_FILE} found, using built-in defaults"
        );
    }
    Config::load_or_default_with_env(&default)
        .wrap_err_with(|| format!("Failed to load configuration from {}", default.display()))
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
