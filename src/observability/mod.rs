//! Observability module
//!
//! Structured logging for `legalpages` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
