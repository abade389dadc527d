//! Sitebundle Core Library
//!
//! Configuration, locale handling, and error types shared by the assembler and the CLI.

pub mod config;
pub mod error;
pub mod framework;
pub mod locale;

pub use config::Config;
pub use error::{CoreError, Result};
pub use framework::FrameworkSettings;
pub use locale::LocaleSet;
