//! `legalpages` - agreement page generator
//!
//! Reads plain-text legal documents (terms, privacy, cookie and
//! parental-control policies) and writes one React page component per
//! document, with an Agree/Disagree interaction and navigation side
//! effects.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod pagegen;
