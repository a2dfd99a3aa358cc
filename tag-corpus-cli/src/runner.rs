//! Batch runner: input units in, formatted annotations out
//!
//! Each input unit (the literal string, the file, or each file of a
//! directory) is split into non-blank trimmed lines, annotated as one batch,
//! formatted, and written before the next unit is read. The first failure
//! stops the run; units already written stay on disk.

use crate::input::{collect_files, non_blank_lines, FileReader, InputSource};
use crate::output::{write_encoded, OutputTarget};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tag_corpus_core::{Formatter, Pipeline};

/// One input file and where its output goes (`None` = standard output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoJob {
    /// File to read
    pub input: PathBuf,
    /// File to write
    pub output: Option<PathBuf>,
}

/// Plan one job per input file, mirroring directory structure
///
/// A directory root is canonicalized first, so relative forms such as `.`
/// or `./corpus` map onto the output directory like absolute ones.
pub fn plan_jobs(input: &InputSource, output: &OutputTarget) -> Result<Vec<IoJob>> {
    let (root, files) = match input {
        InputSource::Literal(_) => return Ok(Vec::new()),
        InputSource::File(path) => (path.clone(), vec![path.clone()]),
        InputSource::Directory(root) => {
            let root = fs::canonicalize(root).with_context(|| {
                format!("Failed to resolve input directory: {}", root.display())
            })?;
            let files = collect_files(&root)?;
            (root, files)
        }
    };

    files
        .into_iter()
        .map(|file| {
            let output = output.path_for(&root, &file)?;
            Ok(IoJob {
                input: file,
                output,
            })
        })
        .collect()
}

/// Settings that do not affect annotation
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Encoding of input files
    pub input_encoding: &'static Encoding,
    /// Encoding of output files
    pub output_encoding: &'static Encoding,
    /// Also echo output to stdout when writing files
    pub verbose: bool,
    /// Hide the progress bar
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input_encoding: encoding_rs::UTF_8,
            output_encoding: encoding_rs::UTF_8,
            verbose: false,
            quiet: false,
        }
    }
}

/// Counts for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Input units processed
    pub units: usize,
    /// Non-blank lines annotated
    pub lines: usize,
    /// Sentences written
    pub sentences: usize,
}

/// Drives a built pipeline over all input units
pub struct BatchRunner<'p, W: Write> {
    pipeline: &'p mut Pipeline,
    formatter: Formatter,
    options: RunOptions,
    stdout: W,
    summary: RunSummary,
}

impl<'p, W: Write> BatchRunner<'p, W> {
    /// Runner writing standard output to `stdout`
    pub fn new(pipeline: &'p mut Pipeline, formatter: Formatter, options: RunOptions, stdout: W) -> Self {
        Self {
            pipeline,
            formatter,
            options,
            stdout,
            summary: RunSummary::default(),
        }
    }

    /// Process `input` and write the results to `output`
    pub fn run(mut self, input: &InputSource, output: &OutputTarget) -> Result<RunSummary> {
        match input {
            InputSource::Literal(text) => {
                let data = self.process_text(text).context("Failed to annotate input string")?;
                let path = match output {
                    OutputTarget::File(path) => Some(path.as_path()),
                    OutputTarget::Stdout | OutputTarget::Directory(_) => None,
                };
                self.emit(&data, path)?;
            }
            InputSource::File(_) | InputSource::Directory(_) => {
                let jobs = plan_jobs(input, output)?;
                if jobs.is_empty() {
                    log::warn!("No files found in input directory");
                }
                self.run_jobs(&jobs)?;
            }
        }

        log::info!(
            "Annotated {} lines into {} sentences from {} input unit(s)",
            self.summary.lines,
            self.summary.sentences,
            self.summary.units
        );
        Ok(self.summary)
    }

    fn run_jobs(&mut self, jobs: &[IoJob]) -> Result<()> {
        let mut progress = ProgressReporter::new(self.options.quiet);
        progress.init_files(jobs.len() as u64);

        for job in jobs {
            log::info!("Processing {}", job.input.display());

            let text = FileReader::read_text(&job.input, self.options.input_encoding)?;
            let data = self
                .process_text(&text)
                .with_context(|| format!("Failed to annotate file: {}", job.input.display()))?;
            self.emit(&data, job.output.as_deref())?;

            let name = job
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            progress.file_completed(&name);
        }

        progress.finish();
        Ok(())
    }

    fn process_text(&mut self, text: &str) -> Result<String> {
        let lines = non_blank_lines(text);
        if lines.is_empty() {
            log::warn!("Input unit contains no non-blank lines");
        }

        let sentences = self.pipeline.annotate(&lines)?;
        let data = self.formatter.format(&sentences)?;

        self.summary.units += 1;
        self.summary.lines += lines.len();
        self.summary.sentences += sentences.len();
        Ok(data)
    }

    fn emit(&mut self, data: &str, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                write_encoded(path, data, self.options.output_encoding)?;
                if self.options.verbose {
                    self.stdout.write_all(data.as_bytes())?;
                }
            }
            None => self.stdout.write_all(data.as_bytes())?,
        }
        self.stdout.flush()?;
        Ok(())
    }
}
