//! Configuration loader
//!
//! Loading pipeline:
//! 1. Existence check and read
//! 2. YAML parsing into `GeneratorConfig`
//! 3. Relative directory resolution against the config file's directory
//! 4. Validation (errors are fatal, warnings are returned to the caller)
//!
//! CLI and environment overrides are applied by the caller through
//! [`ConfigOverrides`] after loading, and take precedence over the file.

use crate::config::schema::GeneratorConfig;
use crate::config::validation::{ValidationResult, Validator};
use crate::error::{ConfigError, Severity, ValidationIssue};

use std::path::{Path, PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderOptions {
    /// Treat validation warnings as errors.
    pub strict: bool,
}

/// Result of loading a configuration.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: GeneratorConfig,

    /// Warnings encountered during validation.
    pub warnings: Vec<ValidationIssue>,
}

/// Directory overrides supplied on the command line or via environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `input_dir` when set.
    pub input_dir: Option<PathBuf>,

    /// Replaces `output_dir` when set.
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Applies the overrides to a configuration in place.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(ref dir) = self.input_dir {
            config.input_dir.clone_from(dir);
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir.clone_from(dir);
        }
    }
}

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new configuration loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads the configuration at `path`, or the built-in configuration
    /// when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// validation reports errors.
    pub fn load_or_builtin(&self, path: Option<&Path>) -> Result<LoadResult, ConfigError> {
        match path {
            Some(path) => self.load(path),
            None => self.finish(GeneratorConfig::default()),
        }
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let config = Self::parse_file(path)?;
        self.finish(config)
    }

    /// Reads and parses a configuration file without validating it.
    ///
    /// Relative `input_dir`/`output_dir` values are resolved against the
    /// directory containing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is
    /// not a valid configuration document.
    pub fn parse_file(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse_str(&content, path, base_dir)
    }

    /// Parses configuration text; `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the YAML is malformed or does
    /// not match the schema.
    pub fn parse_str(
        content: &str,
        origin: &Path,
        base_dir: &Path,
    ) -> Result<GeneratorConfig, ConfigError> {
        let mut config: GeneratorConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: e.location().map(|loc| loc.line()),
                message: e.to_string(),
            })?;

        config.input_dir = resolve(base_dir, &config.input_dir);
        config.output_dir = resolve(base_dir, &config.output_dir);

        tracing::debug!(
            config = %origin.display(),
            input_dir = %config.input_dir.display(),
            output_dir = %config.output_dir.display(),
            pages = config.pages.len(),
            "parsed configuration"
        );

        Ok(config)
    }

    /// Validates a parsed configuration.
    ///
    /// With [`LoaderOptions::strict`] set, every warning is promoted to an
    /// error and the returned warning list is empty.
    #[must_use]
    pub fn check(&self, config: &GeneratorConfig) -> ValidationResult {
        let mut result = Validator::new().validate(config);
        if self.options.strict {
            let promoted = result.warnings.drain(..).map(|w| ValidationIssue {
                severity: Severity::Error,
                ..w
            });
            result.errors.extend(promoted);
        }
        result
    }

    fn finish(&self, config: GeneratorConfig) -> Result<LoadResult, ConfigError> {
        let result = self.check(&config);
        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                errors: result.errors,
            });
        }

        Ok(LoadResult {
            config,
            warnings: result.warnings,
        })
    }
}

fn resolve(base_dir: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base_dir.join(dir)
    }
}

// ============================================================================
// Tests
// ============================================================================
