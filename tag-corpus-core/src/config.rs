//! Pipeline configuration

use crate::attribute::AttributeSet;
use crate::error::{Result, TagError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External toolkit that performs the annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorKind {
    /// spaCy
    Spacy,
    /// stanza
    Stanza,
}

impl VendorKind {
    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorKind::Spacy => "spacy",
            VendorKind::Stanza => "stanza",
        }
    }
}

impl fmt::Display for VendorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorKind {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spacy" => Ok(VendorKind::Spacy),
            "stanza" => Ok(VendorKind::Stanza),
            other => Err(TagError::Config(format!(
                "vendor must be 'spacy' or 'stanza', got '{other}'"
            ))),
        }
    }
}

/// Number of worker processes used by the toolkit for batch inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessCount {
    /// Fixed number of processes (at least one)
    Fixed(usize),
    /// One process per available core
    AllCores,
}

impl ProcessCount {
    /// Interpret the command-line convention: `-1` means all cores
    pub fn from_arg(n_process: i64) -> Result<Self> {
        match n_process {
            -1 => Ok(ProcessCount::AllCores),
            n if n >= 1 => Ok(ProcessCount::Fixed(n as usize)),
            n => Err(TagError::Config(format!(
                "n_process must be -1 or a positive integer, got {n}"
            ))),
        }
    }

    /// Concrete process count for this machine
    pub fn resolve(&self) -> usize {
        match self {
            ProcessCount::Fixed(n) => *n,
            ProcessCount::AllCores => num_cpus::get(),
        }
    }

    /// Whether this is plain single-process execution
    pub fn is_single(&self) -> bool {
        matches!(self, ProcessCount::Fixed(1))
    }
}

impl Default for ProcessCount {
    fn default() -> Self {
        ProcessCount::Fixed(1)
    }
}

/// Immutable description of the pipeline to build for one run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    vendor: VendorKind,
    model_or_lang: String,
    is_tokenized: bool,
    disable_sbd: bool,
    attributes: AttributeSet,
    processes: ProcessCount,
    verbose: bool,
}

impl PipelineConfig {
    /// Start a configuration for `vendor` and model or language code
    pub fn builder(vendor: VendorKind, model_or_lang: impl Into<String>) -> PipelineConfigBuilder {
        PipelineConfigBuilder {
            vendor,
            model_or_lang: model_or_lang.into(),
            is_tokenized: false,
            disable_sbd: false,
            attributes: AttributeSet::default(),
            processes: ProcessCount::default(),
            verbose: false,
        }
    }

    /// Selected toolkit
    pub fn vendor(&self) -> VendorKind {
        self.vendor
    }

    /// Model name (spaCy) or language code (stanza)
    pub fn model_or_lang(&self) -> &str {
        &self.model_or_lang
    }

    /// Input lines are already whitespace-tokenized
    pub fn is_tokenized(&self) -> bool {
        self.is_tokenized
    }

    /// Every line is one sentence
    pub fn disable_sbd(&self) -> bool {
        self.disable_sbd
    }

    /// Attributes to write, in output order
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Worker processes for toolkit-side batching
    pub fn processes(&self) -> ProcessCount {
        self.processes
    }

    /// Let the toolkit report model downloads and loading
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Builder for [`PipelineConfig`]
#[derive(Debug)]
pub struct PipelineConfigBuilder {
    vendor: VendorKind,
    model_or_lang: String,
    is_tokenized: bool,
    disable_sbd: bool,
    attributes: AttributeSet,
    processes: ProcessCount,
    verbose: bool,
}

impl PipelineConfigBuilder {
    /// Treat input as whitespace-delimited tokens
    pub fn is_tokenized(mut self, is_tokenized: bool) -> Self {
        self.is_tokenized = is_tokenized;
        self
    }

    /// Disable sentence boundary detection
    pub fn disable_sbd(mut self, disable_sbd: bool) -> Self {
        self.disable_sbd = disable_sbd;
        self
    }

    /// Set the requested attributes
    pub fn attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the worker process count
    pub fn processes(mut self, processes: ProcessCount) -> Self {
        self.processes = processes;
        self
    }

    /// Toolkit verbosity
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        if self.model_or_lang.trim().is_empty() {
            return Err(TagError::Config(
                "model_or_lang must not be empty".to_string(),
            ));
        }

        if self.vendor == VendorKind::Stanza && !self.processes.is_single() {
            return Err(TagError::UnsupportedOption {
                option: "n_process".to_string(),
                vendor: self.vendor.to_string(),
            });
        }

        Ok(PipelineConfig {
            vendor: self.vendor,
            model_or_lang: self.model_or_lang,
            is_tokenized: self.is_tokenized,
            disable_sbd: self.disable_sbd,
            attributes: self.attributes,
            processes: self.processes,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_from_str() {
        assert_eq!("spacy".parse::<VendorKind>().unwrap(), VendorKind::Spacy);
        assert_eq!("stanza".parse::<VendorKind>().unwrap(), VendorKind::Stanza);
        assert!(matches!(
            "udpipe".parse::<VendorKind>(),
            Err(TagError::Config(_))
        ));
    }

    #[test]
    fn test_process_count_from_arg() {
        assert_eq!(ProcessCount::from_arg(1).unwrap(), ProcessCount::Fixed(1));
        assert_eq!(ProcessCount::from_arg(4).unwrap(), ProcessCount::Fixed(4));
        assert_eq!(ProcessCount::from_arg(-1).unwrap(), ProcessCount::AllCores);
        assert!(ProcessCount::from_arg(0).is_err());
        assert!(ProcessCount::from_arg(-2).is_err());
    }

    #[test]
    fn test_all_cores_resolves_to_positive_count() {
        assert!(ProcessCount::AllCores.resolve() >= 1);
        assert_eq!(ProcessCount::Fixed(3).resolve(), 3);
    }

    #[test]
    fn test_builder_defaults() {
        let config = PipelineConfig::builder(VendorKind::Spacy, "en_core_web_sm")
            .build()
            .unwrap();
        assert_eq!(config.vendor(), VendorKind::Spacy);
        assert_eq!(config.model_or_lang(), "en_core_web_sm");
        assert!(!config.is_tokenized());
        assert!(!config.disable_sbd());
        assert_eq!(config.attributes(), &AttributeSet::default());
        assert!(config.processes().is_single());
    }

    #[test]
    fn test_stanza_rejects_multiple_processes() {
        let result = PipelineConfig::builder(VendorKind::Stanza, "en")
            .processes(ProcessCount::Fixed(4))
            .build();
        match result {
            Err(TagError::UnsupportedOption { option, vendor }) => {
                assert_eq!(option, "n_process");
                assert_eq!(vendor, "stanza");
            }
            other => panic!("expected UnsupportedOption, got {other:?}"),
        }
    }

    #[test]
    fn test_stanza_rejects_all_cores() {
        let result = PipelineConfig::builder(VendorKind::Stanza, "en")
            .processes(ProcessCount::AllCores)
            .build();
        assert!(matches!(result, Err(TagError::UnsupportedOption { .. })));
    }

    #[test]
    fn test_spacy_accepts_multiple_processes() {
        let config = PipelineConfig::builder(VendorKind::Spacy, "en_core_web_sm")
            .processes(ProcessCount::AllCores)
            .build()
            .unwrap();
        assert_eq!(config.processes(), ProcessCount::AllCores);
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = PipelineConfig::builder(VendorKind::Spacy, "  ").build();
        assert!(matches!(result, Err(TagError::Config(_))));
    }
}
