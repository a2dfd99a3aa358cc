//! CLI command implementations

pub mod parse;

pub use parse::{LogLevel, ParseArgs};
