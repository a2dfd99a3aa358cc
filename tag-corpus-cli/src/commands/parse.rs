//! Parse command implementation

use crate::config::CliConfig;
use crate::encoding::{input_encoding, output_encoding};
use crate::input::InputSource;
use crate::output::OutputTarget;
use crate::runner::{BatchRunner, RunOptions};
use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tag_corpus_core::bridge::PYTHON_ENV_VAR;
use tag_corpus_core::{
    find_python, AttributeSet, Formatter, Pipeline, PipelineConfig, ProcessCount, VendorKind,
};

/// Sentence and token segment, and parse and tag an input string or input
/// file with spaCy or stanza
#[derive(Debug, Parser)]
#[command(name = "tag-corpus", version, long_about = None)]
pub struct ParseArgs {
    /// Model or language to use. spaCy models are installed on first use,
    /// stanza models are downloaded automatically
    #[arg(value_name = "MODEL_OR_LANG")]
    pub model_or_lang: String,

    /// Which toolkit to use: spacy or stanza
    #[arg(value_name = "VENDOR")]
    pub vendor: String,

    /// Path to a file or directory with text to parse. Takes precedence over
    /// input_str. Directories are processed recursively
    #[arg(short = 'f', long = "input_item", value_name = "PATH")]
    pub input_item: Option<PathBuf>,

    /// Encoding of the input files [default: locale encoding]
    #[arg(short = 'a', long = "input_encoding", value_name = "ENCODING")]
    pub input_encoding: Option<String>,

    /// Input string to parse
    #[arg(short = 'b', long = "input_str", value_name = "TEXT")]
    pub input_str: Option<String>,

    /// Output file, or output directory when input_item is a directory (the
    /// input structure is mirrored). Defaults to standard output
    #[arg(short = 'o', long = "output_item", value_name = "PATH")]
    pub output_item: Option<PathBuf>,

    /// Encoding of the output files [default: locale encoding]
    #[arg(short = 'c', long = "output_encoding", value_name = "ENCODING")]
    pub output_encoding: Option<String>,

    /// Token attributes to write, joined by formatter_sep, e.g.
    /// `--formatter text pos dep` gives `dog|NOUN|nsubj` [default: text]
    #[arg(long, num_args = 1.., value_parser = ["text", "pos", "dep", "lemma"])]
    pub formatter: Vec<String>,

    /// Separator between token attributes [default: |]
    #[arg(long = "formatter_sep", value_name = "SEP")]
    pub formatter_sep: Option<String>,

    /// Always print the output to stdout, even when writing to output_item
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable sentence boundary detection: every line is one sentence
    #[arg(short = 's', long = "disable_sbd")]
    pub disable_sbd: bool,

    /// Input is already tokenized (space-separated). For stanza this also
    /// disables sentence segmentation
    #[arg(short = 't', long = "is_tokenized")]
    pub is_tokenized: bool,

    /// Number of processes for batch inference, -1 for all cores. spaCy only
    /// [default: 1]
    #[arg(
        short = 'j',
        long = "n_process",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub n_process: Option<i64>,

    /// TOML file with option defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Python interpreter with spaCy or stanza installed
    #[arg(long, env = PYTHON_ENV_VAR, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Pipeline and per-file progress
    Info,
    /// Toolkit host traffic
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Filter string for env_logger
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let pipeline_config = self.pipeline_config(&file_config)?;
        let formatter = Formatter::new(
            pipeline_config.attributes().clone(),
            self.formatter_sep
                .clone()
                .unwrap_or_else(|| file_config.defaults.formatter_sep.clone()),
        );

        let input = InputSource::resolve(self.input_item.as_deref(), self.input_str.as_deref())?;
        let output = OutputTarget::resolve(self.output_item.as_deref(), &input)?;
        let options = RunOptions {
            input_encoding: input_encoding(
                self.input_encoding
                    .as_deref()
                    .or(file_config.defaults.input_encoding.as_deref()),
            )?,
            output_encoding: output_encoding(
                self.output_encoding
                    .as_deref()
                    .or(file_config.defaults.output_encoding.as_deref()),
            )?,
            verbose: self.verbose,
            quiet: self.quiet,
        };

        let python = find_python(
            self.python
                .as_deref()
                .or(file_config.python.interpreter.as_deref()),
        )?;
        log::info!("Using Python interpreter {python}");

        let mut pipeline = Pipeline::build(pipeline_config, &python)?;

        let stdout = io::stdout().lock();
        BatchRunner::new(&mut pipeline, formatter, options, stdout).run(&input, &output)?;

        Ok(())
    }

    /// Validate options into a pipeline configuration
    ///
    /// Runs before any input is read or toolkit started, so option errors
    /// never leave partial output behind.
    pub fn pipeline_config(&self, file_config: &CliConfig) -> Result<PipelineConfig> {
        let vendor: VendorKind = self.vendor.parse()?;

        let attributes = if self.formatter.is_empty() {
            AttributeSet::parse(&file_config.defaults.formatter)?
        } else {
            AttributeSet::parse(&self.formatter)?
        };

        let processes =
            ProcessCount::from_arg(self.n_process.unwrap_or(file_config.defaults.n_process))?;

        let config = PipelineConfig::builder(vendor, &self.model_or_lang)
            .attributes(attributes)
            .is_tokenized(self.is_tokenized)
            .disable_sbd(self.disable_sbd)
            .processes(processes)
            .verbose(self.verbose)
            .build()?;

        Ok(config)
    }

    /// Initialize logging
    pub fn init_logging(&self) {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_filter()),
        )
        .init();
    }
}
