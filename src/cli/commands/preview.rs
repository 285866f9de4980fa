//! `preview` command handler.

use crate::cli::args::PreviewArgs;
use crate::cli::commands::load_config;
use crate::error::LegalPagesError;
use crate::pagegen::{GenerateError, PageGenerator};

/// Execute `preview`: render one page to stdout without writing it.
///
/// # Errors
///
/// Returns an error if the source identifier is not configured, its
/// document is missing, or it cannot be read.
pub fn run(args: &PreviewArgs) -> Result<(), LegalPagesError> {
    let config = load_config(args.config.config.as_deref(), &args.config.overrides())?;

    let Some(page) = config.find_page(&args.source).cloned() else {
        return Err(GenerateError::UnknownPage {
            name: args.source.clone(),
            suggestion: config.suggest_page(&args.source),
        }
        .into());
    };

    let generator = PageGenerator::new(config);
    match generator.render(&page)? {
        Some(rendered) => {
            print!("{rendered}");
            Ok(())
        }
        None => Err(LegalPagesError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!(
                "source document not found: {}",
                generator.source_path(&page).display()
            ),
        ))),
    }
}
