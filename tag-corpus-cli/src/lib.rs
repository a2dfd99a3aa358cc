//! tag-corpus CLI library
//!
//! This library provides the command-line interface that segments,
//! tokenizes, tags and parses text with spaCy or stanza and writes the
//! annotations as flat text.

pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod runner;

pub use error::{CliError, CliResult};
