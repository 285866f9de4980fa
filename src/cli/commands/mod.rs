//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod generate;
pub mod list;
pub mod preview;
pub mod validate;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::{ConfigLoader, ConfigOverrides, GeneratorConfig, LoadResult, LoaderOptions};
use crate::error::LegalPagesError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), LegalPagesError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Generate(args) => generate::run(&args, quiet),
        Commands::Validate(args) => validate::run(&args, quiet),
        Commands::List(args) => list::run(&args),
        Commands::Preview(args) => preview::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Load the configuration file (or the built-in mapping) and apply
/// directory overrides on top of it.
fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<GeneratorConfig, LegalPagesError> {
    let loader = ConfigLoader::new(LoaderOptions::default());
    let LoadResult {
        mut config,
        warnings,
    } = loader.load_or_builtin(path)?;
    for warning in &warnings {
        tracing::warn!(path = %warning.path, "{}", warning.message);
    }
    overrides.apply(&mut config);
    Ok(config)
}
