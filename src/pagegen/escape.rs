//! Escaping for text inserted into generated component source.
//!
//! Legal documents routinely contain characters that JSX treats as
//! syntax (`<`, `{`, `&`). Paragraphs and titles are escaped before
//! they land in text position; string literals go through JSON string
//! encoding, which is valid JavaScript string syntax.

/// Escape text for a JSX text position.
///
/// Replaces `&`, `<`, `>`, `{` and `}` with HTML entities that JSX
/// decodes back to the original characters at render time.
#[must_use]
pub fn escape_jsx_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quote a value as a JavaScript string literal.
///
/// Produces a double-quoted literal with `"`, `\` and control characters
/// escaped.
#[must_use]
pub fn js_string(value: &str) -> String {
    // Serializing a &str cannot fail.
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}
