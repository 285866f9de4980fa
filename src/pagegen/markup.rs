//! Plain text to paragraph markup conversion.
//!
//! Every non-blank source line becomes its own `<p>` element. Lines are
//! never merged, even when a sentence was hard-wrapped across several of
//! them; blank lines only separate and produce nothing.

use crate::pagegen::escape::escape_jsx_text;

/// Indentation of paragraph elements inside the page's content block.
const PARAGRAPH_INDENT: &str = "          ";

/// Split text into trimmed, non-empty lines in source order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Render a single paragraph element.
#[must_use]
pub fn paragraph_element(paragraph: &str) -> String {
    format!("{PARAGRAPH_INDENT}<p>{}</p>", escape_jsx_text(paragraph))
}

/// Convert raw document text into newline-joined paragraph elements.
#[must_use]
pub fn text_to_markup(text: &str) -> String {
    paragraphs(text)
        .into_iter()
        .map(paragraph_element)
        .collect::<Vec<_>>()
        .join("\n")
}
