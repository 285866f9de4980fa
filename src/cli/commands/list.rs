//! `list` command handler.

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::load_config;
use crate::error::LegalPagesError;

#[derive(Debug, Serialize)]
struct ListedPage<'a> {
    source: &'a str,
    output: &'a str,
    component: &'a str,
    title: &'a str,
    present: bool,
}

/// Execute `list`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(args: &ListArgs) -> Result<(), LegalPagesError> {
    let config = load_config(args.config.config.as_deref(), &args.config.overrides())?;

    let pages: Vec<ListedPage<'_>> = config
        .pages
        .iter()
        .map(|page| ListedPage {
            source: &page.source,
            output: &page.output,
            component: &page.component,
            title: &page.title,
            present: config.input_dir.join(&page.source).exists(),
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            println!("input:  {}", config.input_dir.display());
            println!("output: {}", config.output_dir.display());
            println!();
            for page in &pages {
                let status = if page.present { "ok" } else { "missing" };
                println!(
                    "  {:<16} → {:<24} {:<26} {:<8} {}",
                    page.source, page.output, page.component, status, page.title
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input_dir": config.input_dir,
                "output_dir": config.output_dir,
                "pages": pages,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
