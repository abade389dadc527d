//! Assemble command - builds the host-ready bundle

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use sitebundle_assembler::{Assembler, AssemblyStats, PublishMode};
use sitebundle_core::Config;

/// Command-line overrides for configured paths.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub next_dir: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub in_place: bool,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            tracing::info!(?output, "Overriding output directory from CLI");
            config.paths.out_dir.clone_from(output);
        }
        if let Some(next_dir) = &self.next_dir {
            config.paths.next_dir.clone_from(next_dir);
        }
        if let Some(public_dir) = &self.public_dir {
            config.paths.public_dir.clone_from(public_dir);
        }
    }

    fn publish_mode(&self) -> PublishMode {
        if self.in_place {
            PublishMode::InPlace
        } else {
            PublishMode::Staged
        }
    }
}

/// Run the assemble command.
///
/// Relative paths in the configuration are resolved against `root`.
pub fn run(mut config: Config, root: &Path, overrides: &Overrides) -> Result<AssemblyStats> {
    overrides.apply(&mut config);
    tracing::debug!(?config, "Loaded configuration");

    let assembler = Assembler::new(&config)
        .wrap_err("Invalid configuration")?
        .with_root(root)
        .with_publish_mode(overrides.publish_mode());

    let stats = assembler.assemble().wrap_err("Assembly failed")?;

    println!("Static site assembled in {}/", config.paths.out_dir.display());

    tracing::info!(?stats, "Assembly completed successfully");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_run_with_overrides() {
        let site = tempfile::tempdir().unwrap();
        let root = site.path();
        write(&root.join("assets/robots.txt"), "User-agent: *");
        write(&root.join("build/static/main.js"), "js");
        write(&root.join("build/server/pages/ja/about.html"), "about");

        let overrides = Overrides {
            output: Some(PathBuf::from("dist")),
            next_dir: Some(PathBuf::from("build")),
            public_dir: Some(PathBuf::from("assets")),
            in_place: false,
        };
        let stats = run(Config::default(), root, &overrides).unwrap();

        assert_eq!(stats.locales, vec!["ja"]);
        assert!(root.join("dist/robots.txt").exists());
        assert!(root.join("dist/_next/static/main.js").exists());
        assert!(root.join("dist/ja/about.html").exists());
        assert!(!root.join("out").exists());
    }

    #[test]
    fn test_run_reports_missing_input() {
        let site = tempfile::tempdir().unwrap();
        let err = run(Config::default(), site.path(), &Overrides::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Assembly failed"));
        assert!(message.contains("public assets"));
    }

    #[test]
    fn test_publish_mode() {
        let overrides = Overrides {
            in_place: true,
            ..Overrides::default()
        };
        assert_eq!(overrides.publish_mode(), PublishMode::InPlace);
        assert_eq!(Overrides::default().publish_mode(), PublishMode::Staged);
    }
}
