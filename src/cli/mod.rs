//! Command-line interface
//!
//! Argument definitions and the handlers each subcommand dispatches to.

pub mod args;
pub mod commands;
