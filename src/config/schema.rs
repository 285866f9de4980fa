//! Configuration schema for `legalpages`.
//!
//! A `GeneratorConfig` names the input and output directories, the
//! navigation routes used by the generated pages, and the ordered
//! document mapping. Every field has a default, so an empty YAML
//! document describes the built-in four-page setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory holding the plain-text legal documents.
pub const DEFAULT_INPUT_DIR: &str = "src/legal";

/// Default directory receiving the generated page components.
pub const DEFAULT_OUTPUT_DIR: &str = "src/pages";

/// Default route the "Agree" action navigates to.
pub const DEFAULT_AGREE_ROUTE: &str = "/register";

/// Default route the "Disagree" action navigates to.
pub const DEFAULT_DISAGREE_ROUTE: &str = "/";

// ============================================================================
// Generator Configuration
// ============================================================================

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the source documents are read from.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory the generated pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Navigation targets for the agree/disagree actions.
    #[serde(default)]
    pub routes: RouteConfig,

    /// Ordered document mapping. Processing follows this order.
    #[serde(default = "builtin_pages")]
    pub pages: Vec<PageEntry>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            routes: RouteConfig::default(),
            pages: builtin_pages(),
        }
    }
}

impl GeneratorConfig {
    /// Look up a mapping entry by its source identifier.
    #[must_use]
    pub fn find_page(&self, source: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|p| p.source == source)
    }

    /// Suggest the configured source identifier closest to `input`.
    ///
    /// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
    #[must_use]
    pub fn suggest_page(&self, input: &str) -> Option<String> {
        self.pages
            .iter()
            .map(|p| (p.source.as_str(), strsim::damerau_levenshtein(input, &p.source)))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(name, _)| name.to_string())
    }
}

/// Navigation routes embedded in every generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Route visited after the agreement flag is stored.
    #[serde(default = "default_agree_route")]
    pub agree: String,

    /// Route visited when the user declines.
    #[serde(default = "default_disagree_route")]
    pub disagree: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            agree: default_agree_route(),
            disagree: default_disagree_route(),
        }
    }
}

// ============================================================================
// Document Mapping
// ============================================================================

/// One source document paired with the page generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    /// Source file name inside the input directory (e.g. `terms.txt`).
    pub source: String,

    /// Output file name inside the output directory (e.g. `terms.tsx`).
    pub output: String,

    /// Exported component identifier; also keys the agreement flag.
    pub component: String,

    /// Heading shown at the top of the page.
    pub title: String,
}

impl PageEntry {
    /// Creates a mapping entry.
    pub fn new(
        source: impl Into<String>,
        output: impl Into<String>,
        component: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            component: component.into(),
            title: title.into(),
        }
    }

    /// Client-side storage key recording that this page was accepted.
    #[must_use]
    pub fn agreement_key(&self) -> String {
        format!("{}Agreed", self.component)
    }
}

/// Built-in mapping rows: source, output, component, title.
static BUILTIN_PAGES: [(&str, &str, &str, &str); 4] = [
    (
        "terms.txt",
        "terms.tsx",
        "TermsAndConditionsPage",
        "Terms and Conditions",
    ),
    (
        "privacy.txt",
        "privacy.tsx",
        "PrivacyPolicyPage",
        "Privacy Policy",
    ),
    (
        "cookies.txt",
        "cookies.tsx",
        "CookiePolicyPage",
        "Cookie Policy",
    ),
    (
        "parental.txt",
        "parental-controls.tsx",
        "ParentalControlsPage",
        "Parental Controls",
    ),
];

/// Returns the built-in four-entry document mapping.
#[must_use]
pub fn builtin_pages() -> Vec<PageEntry> {
    BUILTIN_PAGES
        .iter()
        .map(|&(source, output, component, title)| PageEntry::new(source, output, component, title))
        .collect()
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_agree_route() -> String {
    DEFAULT_AGREE_ROUTE.to_string()
}

fn default_disagree_route() -> String {
    DEFAULT_DISAGREE_ROUTE.to_string()
}

// ============================================================================
// Tests
// ============================================================================
