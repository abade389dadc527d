//! Sitebundle CLI
//!
//! Reassembles a multilingual static export into a flat bundle for a
//! static host.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use sitebundle::cmd;

/// Command-line interface for sitebundle.
#[derive(Parser)]
#[command(
    name = "sitebundle",
    version,
    about = "Assemble a multilingual static export for static hosting"
)]
struct Cli {
    /// Path to configuration file [default: sitebundle.toml under --root if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project directory that relative paths are resolved against
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Assemble the static bundle from the framework build output
    Assemble {
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Framework build output directory
        #[arg(long)]
        next_dir: Option<PathBuf>,
        /// Public assets directory
        #[arg(long)]
        public_dir: Option<PathBuf>,
        /// Reset and write the output directory directly instead of staging
        #[arg(long)]
        in_place: bool,
    },
    /// Validate configuration and build inputs
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print the locale settings for the web framework config as JSON
    FrameworkConfig {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitebundle::init_tracing(cli.verbose);

    let config = sitebundle::load_config(&cli.root, cli.config.as_deref())?;

    match cli.command {
        Commands::Assemble {
            output,
            next_dir,
            public_dir,
            in_place,
        } => {
            let overrides = cmd::assemble::Overrides {
                output,
                next_dir,
                public_dir,
                in_place,
            };
            cmd::assemble::run(config, &cli.root, &overrides)?;
        }
        Commands::Check { strict } => {
            cmd::check::run(&config, &cli.root, strict)?;
        }
        Commands::FrameworkConfig { output } => {
            cmd::framework::run(&config, &cli.root, output.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_assemble_defaults() {
        let args = ["sitebundle", "assemble"];
        let cli = Cli::parse_from(args);

        assert!(cli.config.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Assemble {
                output,
                next_dir,
                public_dir,
                in_place,
            } => {
                assert!(output.is_none());
                assert!(next_dir.is_none());
                assert!(public_dir.is_none());
                assert!(!in_place);
            }
            _ => panic!("Expected Assemble command"),
        }
    }

    #[test]
    fn test_cli_assemble_overrides() {
        let args = [
            "sitebundle",
            "assemble",
            "--output",
            "dist",
            "--next-dir",
            "build/.next",
            "--public-dir",
            "static",
            "--in-place",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Assemble {
                output,
                next_dir,
                public_dir,
                in_place,
            } => {
                assert_eq!(output, Some(PathBuf::from("dist")));
                assert_eq!(next_dir, Some(PathBuf::from("build/.next")));
                assert_eq!(public_dir, Some(PathBuf::from("static")));
                assert!(in_place);
            }
            _ => panic!("Expected Assemble command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["sitebundle", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_framework_config_parsing() {
        let args = ["sitebundle", "framework-config", "-o", "i18n.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::FrameworkConfig { output } => {
                assert_eq!(output, Some(PathBuf::from("i18n.json")));
            }
            _ => panic!("Expected FrameworkConfig command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let args = [
            "sitebundle",
            "-vv",
            "--config",
            "site.toml",
            "-C",
            "homepage",
            "assemble",
        ];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert_eq!(cli.root, PathBuf::from("homepage"));
    }
}
