//! The read → transform → write pipeline.
//!
//! `PageGenerator` walks the document mapping in order. Each entry is
//! handled on its own: a missing source is skipped and reported, an
//! existing source is read as UTF-8, converted to paragraphs, rendered
//! and written over whatever was at the output path before. Any I/O or
//! decode failure on an existing source aborts the run; pages written
//! for earlier entries stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::schema::{GeneratorConfig, PageEntry};
use crate::pagegen::error::GenerateError;
use crate::pagegen::markup::{paragraphs, text_to_markup};
use crate::pagegen::page::render_page;

/// Byte-order mark some editors prepend to UTF-8 files.
const UTF8_BOM: char = '\u{feff}';

/// Options controlling a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// Render pages without creating directories or writing files.
    pub dry_run: bool,
}

/// Outcome of processing one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    /// The page was rendered (and written, unless dry-running).
    Generated {
        /// Source identifier of the entry.
        source: String,
        /// Path the page was written to.
        output: PathBuf,
        /// Number of paragraph elements in the page.
        paragraphs: usize,
    },
    /// The source document does not exist; nothing was written.
    Skipped {
        /// Source identifier of the entry.
        source: String,
        /// Path that was looked up.
        path: PathBuf,
    },
}

impl PageOutcome {
    /// Source identifier of the entry this outcome belongs to.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Generated { source, .. } | Self::Skipped { source, .. } => source,
        }
    }
}

/// Summary of a completed generation run, in mapping order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Per-entry outcomes.
    pub outcomes: Vec<PageOutcome>,

    /// Whether the run wrote nothing.
    pub dry_run: bool,
}

impl GenerationReport {
    /// Number of pages generated.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PageOutcome::Generated { .. }))
            .count()
    }

    /// Number of entries skipped because their source was missing.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.generated()
    }
}

/// Generates one page per mapping entry.
#[derive(Debug)]
pub struct PageGenerator {
    config: GeneratorConfig,
    options: GeneratorOptions,
}

impl PageGenerator {
    /// Creates a generator for `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_options(config, GeneratorOptions::default())
    }

    /// Creates a generator with explicit options.
    #[must_use]
    pub const fn with_options(config: GeneratorConfig, options: GeneratorOptions) -> Self {
        Self { config, options }
    }

    /// The configuration this generator runs with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the pipeline over every mapping entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created, or if
    /// an existing source cannot be read or its page cannot be written.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        self.run_with(|_| {})
    }

    /// Runs the pipeline, handing each outcome to `on_outcome` as soon as
    /// its entry is done.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run). Outcomes already handed out before the
    /// failure are not rolled back.
    pub fn run_with<F>(&self, mut on_outcome: F) -> Result<GenerationReport, GenerateError>
    where
        F: FnMut(&PageOutcome),
    {
        if !self.options.dry_run {
            fs::create_dir_all(&self.config.output_dir).map_err(|source| {
                GenerateError::OutputDir {
                    path: self.config.output_dir.clone(),
                    source,
                }
            })?;
        }

        let mut report = GenerationReport {
            outcomes: Vec::with_capacity(self.config.pages.len()),
            dry_run: self.options.dry_run,
        };

        for page in &self.config.pages {
            let outcome = self.process(page)?;
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        tracing::info!(
            generated = report.generated(),
            skipped = report.skipped(),
            dry_run = report.dry_run,
            "generation finished"
        );

        Ok(report)
    }

    /// Renders the page for one entry without writing it.
    ///
    /// Returns `Ok(None)` when the source document does not exist.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::ReadSource` if the source exists but cannot
    /// be read as UTF-8.
    pub fn render(&self, page: &PageEntry) -> Result<Option<String>, GenerateError> {
        let path = self.source_path(page);
        if !path.exists() {
            return Ok(None);
        }
        let text = read_source(&path)?;
        Ok(Some(render_page(
            page,
            &self.config.routes,
            &text_to_markup(&text),
        )))
    }

    /// Full path of an entry's source document.
    #[must_use]
    pub fn source_path(&self, page: &PageEntry) -> PathBuf {
        self.config.input_dir.join(&page.source)
    }

    /// Full path of an entry's generated page.
    #[must_use]
    pub fn output_path(&self, page: &PageEntry) -> PathBuf {
        self.config.output_dir.join(&page.output)
    }

    fn process(&self, page: &PageEntry) -> Result<PageOutcome, GenerateError> {
        let source_path = self.source_path(page);
        if !source_path.exists() {
            tracing::debug!(source = %page.source, path = %source_path.display(), "source not found");
            return Ok(PageOutcome::Skipped {
                source: page.source.clone(),
                path: source_path,
            });
        }

        let text = read_source(&source_path)?;
        let paragraph_count = paragraphs(&text).len();
        let content = render_page(page, &self.config.routes, &text_to_markup(&text));

        let output_path = self.output_path(page);
        if !self.options.dry_run {
            fs::write(&output_path, content).map_err(|source| GenerateError::WriteOutput {
                path: output_path.clone(),
                source,
            })?;
        }

        tracing::debug!(
            source = %page.source,
            output = %output_path.display(),
            paragraphs = paragraph_count,
            "rendered page"
        );

        Ok(PageOutcome::Generated {
            source: page.source.clone(),
            output: output_path,
            paragraphs: paragraph_count,
        })
    }
}

/// Read a source document as UTF-8, dropping one leading byte-order mark.
fn read_source(path: &Path) -> Result<String, GenerateError> {
    let mut text = fs::read_to_string(path).map_err(|source| GenerateError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    if text.starts_with(UTF8_BOM) {
        text.replace_range(..UTF8_BOM.len_utf8(), "");
    }
    Ok(text)
}
