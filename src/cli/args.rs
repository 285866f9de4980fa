//! CLI argument definitions
//!
//! All Clap derive structs for `legalpages` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Generate agreement page components from plain-text legal documents.
#[derive(Parser, Debug)]
#[command(name = "legalpages", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "LEGALPAGES_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one page component per configured document.
    Generate(GenerateArgs),

    /// Validate the document mapping without generating anything.
    Validate(ValidateArgs),

    /// List configured documents and whether their sources exist.
    List(ListArgs),

    /// Render a single page to stdout.
    Preview(PreviewArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Configuration source and directory overrides shared by most commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a YAML configuration file (built-in mapping if omitted).
    #[arg(short, long, env = "LEGALPAGES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the plain-text documents.
    #[arg(short, long, env = "LEGALPAGES_INPUT_DIR")]
    pub input: Option<PathBuf>,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory receiving the generated pages.
    #[arg(short, long, env = "LEGALPAGES_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Render pages but write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Directory overrides taken from flags and environment.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input_dir: self.config.input.clone(),
            output_dir: self.output.clone(),
        }
    }
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a YAML configuration file (built-in mapping if omitted).
    #[arg(short, long, env = "LEGALPAGES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Source identifier of the page to render (e.g. `terms.txt`).
    pub source: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl ConfigArgs {
    /// Directory overrides taken from flags and environment.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input_dir: self.input.clone(),
            output_dir: None,
        }
    }
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
