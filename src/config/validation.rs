//! Configuration validation.
//!
//! Validation runs on the fully deserialized `GeneratorConfig` and
//! collects ALL issues rather than stopping at the first one, so a single
//! `validate` run reports everything wrong with a mapping file.

use crate::config::schema::{GeneratorConfig, PageEntry};
use crate::error::{Severity, ValidationIssue};

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// ECMAScript identifier grammar restricted to ASCII.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern compiles")
});

/// Words that cannot name a function declaration.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent generation).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Returns `true` if `name` can be used as the exported component name.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !RESERVED_WORDS.contains(&name)
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns every issue found.
    pub fn validate(&mut self, config: &GeneratorConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_route("routes.agree", &config.routes.agree);
        self.validate_route("routes.disagree", &config.routes.disagree);

        if config.pages.is_empty() {
            self.add_warning("pages", "No pages configured; nothing will be generated");
        }

        for (index, page) in config.pages.iter().enumerate() {
            self.validate_page(index, page);
        }
        self.validate_uniqueness(&config.pages);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Per-field checks
    // ========================================================================

    fn validate_route(&mut self, path: &str, route: &str) {
        if !route.starts_with('/') {
            self.add_error(path, &format!("Route '{route}' must start with '/'"));
        }
    }

    fn validate_page(&mut self, index: usize, page: &PageEntry) {
        let base = format!("pages[{index}]");

        self.validate_file_name(&format!("{base}.source"), &page.source);
        self.validate_file_name(&format!("{base}.output"), &page.output);

        let has_component_ext = [".tsx", ".jsx"]
            .iter()
            .any(|ext| page.output.ends_with(ext));
        if !page.output.is_empty() && !has_component_ext {
            self.add_warning(
                &format!("{base}.output"),
                &format!("Output '{}' does not end in .tsx or .jsx", page.output),
            );
        }

        let component_path = format!("{base}.component");
        if is_valid_identifier(&page.component) {
            if !page.component.starts_with(|c: char| c.is_ascii_uppercase()) {
                self.add_warning(
                    &component_path,
                    &format!(
                        "Component '{}' should start with an uppercase letter",
                        page.component
                    ),
                );
            }
        } else {
            self.add_error(
                &component_path,
                &format!("Component '{}' is not a valid identifier", page.component),
            );
        }

        if page.title.trim().is_empty() {
            self.add_error(&format!("{base}.title"), "Title is required and cannot be empty");
        }
    }

    fn validate_file_name(&mut self, path: &str, name: &str) {
        if name.is_empty() {
            self.add_error(path, "File name is required and cannot be empty");
        } else if name.contains('/') || name.contains('\\') {
            self.add_error(
                path,
                &format!("File name '{name}' must not contain path separators"),
            );
        } else if name == "." || name == ".." {
            self.add_error(path, &format!("File name '{name}' is not a file"));
        }
    }

    fn validate_uniqueness(&mut self, pages: &[PageEntry]) {
        let mut sources = HashSet::new();
        let mut outputs = HashSet::new();
        let mut components = HashSet::new();

        for (index, page) in pages.iter().enumerate() {
            if !sources.insert(page.source.as_str()) {
                self.add_error(
                    &format!("pages[{index}].source"),
                    &format!("Duplicate source '{}'", page.source),
                );
            }
            if !outputs.insert(page.output.as_str()) {
                self.add_error(
                    &format!("pages[{index}].output"),
                    &format!("Duplicate output '{}'", page.output),
                );
            }
            if !components.insert(page.component.as_str()) {
                self.add_error(
                    &format!("pages[{index}].component"),
                    &format!(
                        "Duplicate component '{}' would share an agreement flag",
                        page.component
                    ),
                );
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
