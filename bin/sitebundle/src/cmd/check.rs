//! Check command - validate configuration and build inputs

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use sitebundle_assembler::{InputPolicy, SourceLayout};
use sitebundle_core::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and reports every declared input as present
/// or missing.
pub fn run(config: &Config, root: &Path, strict: bool) -> Result<()> {
    tracing::info!(?root, strict, "Checking configuration and inputs");

    let result = validate(config, root);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect errors and warnings without printing a summary.
pub fn validate(config: &Config, root: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    if let Err(e) = config.validate() {
        result.add_error(format!("Configuration error: {e}"));
        println!("  ✗ Configuration invalid: {e}");
        return result;
    }
    println!("  ✓ Configuration valid");

    // validate() succeeded, so the locale set builds.
    let Ok(locales) = config.locale_set() else {
        return result;
    };

    println!("\nChecking inputs...");
    let layout = SourceLayout::from_paths(&config.paths).rooted_at(root);
    for input in layout.declared_inputs(&locales) {
        if input.exists() {
            println!("  ✓ {} ({})", input.name, input.path.display());
            continue;
        }
        match input.policy {
            InputPolicy::Required => {
                result.add_error(format!(
                    "Required input missing: {} ({})",
                    input.name,
                    input.path.display()
                ));
                println!("  ✗ {} missing (required)", input.name);
            }
            InputPolicy::Optional => {
                result.add_warning(format!(
                    "Optional input missing: {} ({})",
                    input.name,
                    input.path.display()
                ));
                println!("  ⚠ {} missing (optional)", input.name);
            }
        }
    }

    let out = root.join(&config.paths.out_dir);
    if out.exists() && !out.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            out.display()
        ));
    }

    result
}
