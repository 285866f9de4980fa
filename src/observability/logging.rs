//! Logging initialization for `legalpages`.
//!
//! Structured logging via `tracing`, rendered to stderr in human-readable
//! or JSON form. Verbosity comes from `-v` flags unless
//! `LEGALPAGES_LOG_LEVEL` overrides it.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_LEVEL_ENV: &str = "LEGALPAGES_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Picks the filter directive: a non-blank `LEGALPAGES_LOG_LEVEL` value
/// wins over the `-v` count.
#[must_use]
pub fn filter_directive(env_value: Option<&str>, verbosity: u8) -> String {
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => verbosity_to_directive(verbosity).to_string(),
    }
}

fn build_filter(env_value: Option<&str>, verbosity: u8) -> EnvFilter {
    EnvFilter::try_new(filter_directive(env_value, verbosity))
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Initializes the global tracing subscriber.
///
/// An unparseable `LEGALPAGES_LOG_LEVEL` falls back to the `-v` level.
/// Uses `try_init()`, so later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let env_value = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = build_filter(env_value.as_deref(), verbosity);

    let show_target = verbosity >= 2;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_level_wins_over_verbose_flags() {
        assert_eq!(filter_directive(Some("error"), 3), "error");
        assert_eq!(filter_directive(Some("legalpages=debug"), 0), "legalpages=debug");
    }

    #[test]
    fn blank_env_level_uses_verbosity() {
        assert_eq!(filter_directive(None, 0), "warn");
        assert_eq!(filter_directive(Some(""), 1), "info");
        assert_eq!(filter_directive(Some("   "), 2), "debug");
    }

    #[test]
    fn verbose_count_saturates_at_trace() {
        assert_eq!(verbosity_to_directive(3), "trace");
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn unparseable_env_level_falls_back() {
        let filter = build_filter(Some("legalpages=loud"), 1);
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }

    #[test]
    fn log_format_parses_from_cli_value() {
        use clap::ValueEnum;
        assert_eq!(LogFormat::from_str("json", true), Ok(LogFormat::Json));
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }
}
