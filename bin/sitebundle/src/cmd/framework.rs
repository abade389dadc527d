//! Framework-config command - exports locale settings for the web framework

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use sitebundle_core::{Config, FrameworkSettings};

/// Run the framework-config command.
///
/// Writes the JSON to `output` (relative to `root`) when given, otherwise
/// prints it to stdout.
pub fn run(config: &Config, root: &Path, output: Option<&Path>) -> Result<()> {
    let settings =
        FrameworkSettings::from_config(config).wrap_err("Invalid locale configuration")?;

    match output {
        Some(path) => {
            let path = root.join(path);
            settings
                .write(&path)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        }
        None => print!("{}", settings.to_json()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i18n.json");

        run(&Config::default(), Path::new("."), Some(&path)).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains(r#""defaultLocale": "ja""#));
        assert!(json.contains(r#""zh-Hant""#));
    }

    #[test]
    fn test_rejects_invalid_locales() {
        let mut config = Config::default();
        config.i18n.locales.clear();
        assert!(run(&config, Path::new("."), None).is_err());
    }

    #[test]
    fn test_relative_output_resolved_against_root() {
        let dir = tempfile::tempdir().unwrap();

        run(&Config::default(), dir.path(), Some(Path::new("config/i18n.json"))).unwrap();

        assert!(dir.path().join("config/i18n.json").exists());
    }
}
