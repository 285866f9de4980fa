//! `validate` command handler.

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::{ConfigLoader, GeneratorConfig, LoaderOptions};
use crate::error::{ConfigError, LegalPagesError, ValidationIssue};

/// Execute `validate`.
///
/// Reports every issue in the mapping. Errors (or warnings, with
/// `--strict`) make the command fail.
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed or fails
/// validation.
pub fn run(args: &ValidateArgs, quiet: bool) -> Result<(), LegalPagesError> {
    let loader = ConfigLoader::new(LoaderOptions {
        strict: args.strict,
    });
    let config = match args.config {
        Some(ref path) => ConfigLoader::parse_file(path)?,
        None => GeneratorConfig::default(),
    };
    let result = loader.check(&config);

    match args.format {
        OutputFormat::Human => {
            if !quiet {
                for issue in result.errors.iter().chain(&result.warnings) {
                    eprintln!("{issue}");
                }
            }
            if result.is_valid() && !quiet {
                println!("Configuration valid ({} page(s))", config.pages.len());
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "valid": result.is_valid(),
                "pages": config.pages.len(),
                "errors": issues_json(&result.errors),
                "warnings": issues_json(&result.warnings),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if result.has_errors() {
        Err(ConfigError::ValidationError {
            errors: result.errors,
        }
        .into())
    } else {
        Ok(())
    }
}

fn issues_json(issues: &[ValidationIssue]) -> Vec<serde_json::Value> {
    issues
        .iter()
        .map(|i| json!({ "path": i.path, "message": i.message }))
        .collect()
}
