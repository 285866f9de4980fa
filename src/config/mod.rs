//! Configuration module
//!
//! Handles the document mapping, directory settings, and navigation
//! routes: built-in defaults, YAML loading, overrides, and validation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLoader, ConfigOverrides, LoadResult, LoaderOptions};
pub use schema::*;
pub use validation::{ValidationResult, Validator};
