//! `generate` command handler.

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::cli::commands::load_config;
use crate::error::LegalPagesError;
use crate::pagegen::{GeneratorOptions, PageGenerator, PageOutcome};

/// Execute `generate`.
///
/// Prints one line per entry as it is processed: `Generated <path>` on
/// stdout, or a warning on stderr for a missing source. In JSON mode the
/// full report is printed to stdout once the run completes.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the output directory
/// cannot be created, or an existing source cannot be read.
pub fn run(args: &GenerateArgs, quiet: bool) -> Result<(), LegalPagesError> {
    let config = load_config(args.config.config.as_deref(), &args.overrides())?;
    let options = GeneratorOptions {
        dry_run: args.dry_run,
    };
    let generator = PageGenerator::with_options(config, options);
    let human = args.format == OutputFormat::Human;

    let report = generator.run_with(|outcome| match outcome {
        PageOutcome::Generated {
            output, paragraphs, ..
        } => {
            if human && !quiet {
                if args.dry_run {
                    println!("Would generate {} ({paragraphs} paragraphs)", output.display());
                } else {
                    println!("Generated {}", output.display());
                }
            }
        }
        PageOutcome::Skipped { source, .. } => {
            if !quiet {
                eprintln!("WARNING: skipping {source}, file not found");
            }
        }
    })?;

    match args.format {
        OutputFormat::Human => {
            if !quiet {
                eprintln!(
                    "{} page(s) generated, {} skipped",
                    report.generated(),
                    report.skipped()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
