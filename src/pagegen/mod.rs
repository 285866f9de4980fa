//! Page generation
//!
//! Turns plain-text legal documents into agreement page components:
//! paragraph splitting, escaping, page rendering, and the batch
//! pipeline that reads sources and writes pages.

pub mod error;
pub mod escape;
pub mod generator;
pub mod markup;
pub mod page;

pub use error::GenerateError;
pub use generator::{GenerationReport, GeneratorOptions, PageGenerator, PageOutcome};
pub use markup::{paragraphs, text_to_markup};
pub use page::render_page;
