//! Configuration file support
//!
//! Optional TOML file supplying defaults for options not given on the
//! command line:
//!
//! ```toml
//! [defaults]
//! formatter = ["text", "pos"]
//! formatter_sep = "/"
//! input_encoding = "utf-8"
//! output_encoding = "utf-8"
//! n_process = 1
//!
//! [python]
//! interpreter = "/opt/nlp/.venv/bin/python"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Option defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Toolkit host configuration
    #[serde(default)]
    pub python: PythonConfig,
}

/// Defaults for command-line options
///
/// Keys missing from the table keep their built-in values.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Token attributes to write
    pub formatter: Vec<String>,

    /// Separator between token attributes
    pub formatter_sep: String,

    /// Encoding of input files (locale encoding when unset)
    pub input_encoding: Option<String>,

    /// Encoding of output files (locale encoding when unset)
    pub output_encoding: Option<String>,

    /// Worker processes (-1 = all cores)
    pub n_process: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            formatter: vec!["text".to_string()],
            formatter_sep: "|".to_string(),
            input_encoding: None,
            output_encoding: None,
            n_process: 1,
        }
    }
}

/// Python interpreter settings
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PythonConfig {
    /// Interpreter with spaCy and/or stanza installed
    pub interpreter: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        Ok(config)
    }
}
