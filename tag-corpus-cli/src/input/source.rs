//! Input source resolution

use crate::error::CliError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Where the text to annotate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Literal(String),
    /// A single file
    File(PathBuf),
    /// Every file under a directory, recursively
    Directory(PathBuf),
}

impl InputSource {
    /// Pick the input: a path wins over a literal string
    pub fn resolve(input_item: Option<&Path>, input_str: Option<&str>) -> Result<Self> {
        if let Some(path) = input_item {
            if path.is_dir() {
                return Ok(InputSource::Directory(path.to_path_buf()));
            }
            if path.is_file() {
                return Ok(InputSource::File(path.to_path_buf()));
            }
            return Err(CliError::InputNotFound(path.display().to_string()).into());
        }

        match input_str {
            Some(text) => Ok(InputSource::Literal(text.to_string())),
            None => Err(CliError::ConfigError(
                "'input_str' or 'input_item' must be given".to_string(),
            )
            .into()),
        }
    }
}
