//! Vendor-agnostic annotation pipeline
//!
//! [`Pipeline`] combines a [`Vendor`] policy with a [`Backend`] that runs the
//! actual toolkit. It is built once per run and reused for every batch.

use crate::annotation::{AnnotatedSentence, AnnotatedToken};
use crate::bridge::{PythonBridge, PythonEnvironment};
use crate::config::PipelineConfig;
use crate::error::{Result, TagError};
use crate::vendor::{vendor_for, FieldMap, PipelineInput, PipelineSpec, StageSet, Vendor};
use std::collections::HashMap;

/// Token as reported by the toolkit: native field name to value
pub type NativeToken = HashMap<String, Option<String>>;

/// Tokens of one sentence
pub type NativeSentence = Vec<NativeToken>;

/// Sentences produced for one input line
pub type NativeDocument = Vec<NativeSentence>;

/// Something that runs a loaded toolkit pipeline over a batch of lines
pub trait Backend {
    /// Annotate `inputs`, returning exactly one document per input
    fn annotate(&mut self, inputs: &[PipelineInput]) -> Result<Vec<NativeDocument>>;
}

/// Configured annotation pipeline for one run
pub struct Pipeline {
    config: PipelineConfig,
    vendor: Box<dyn Vendor>,
    stages: StageSet,
    spec: PipelineSpec,
    fields: FieldMap,
    backend: Box<dyn Backend>,
}

impl Pipeline {
    /// Build the pipeline, starting the toolkit host with `python`
    ///
    /// May download the model on first use.
    pub fn build(config: PipelineConfig, python: &PythonEnvironment) -> Result<Self> {
        Self::with_backend(config, |spec| {
            PythonBridge::spawn(python, spec).map(|bridge| Box::new(bridge) as Box<dyn Backend>)
        })
    }

    /// Build the pipeline with a custom backend
    ///
    /// `connect` receives the native description of the pipeline to load.
    pub fn with_backend<F>(config: PipelineConfig, connect: F) -> Result<Self>
    where
        F: FnOnce(&PipelineSpec) -> Result<Box<dyn Backend>>,
    {
        let vendor = vendor_for(config.vendor());
        let stages = vendor.configure(config.attributes(), config.disable_sbd(), config.is_tokenized());
        let spec = vendor.native_spec(&config, &stages);
        let fields = FieldMap::resolve(vendor.as_ref(), config.attributes());

        log::info!(
            "Building {} pipeline for '{}' with stages {:?}",
            config.vendor(),
            config.model_or_lang(),
            stages.iter().collect::<Vec<_>>()
        );
        log::debug!("Native pipeline spec: {spec:?}");

        let backend = connect(&spec)?;

        Ok(Self {
            config,
            vendor,
            stages,
            spec,
            fields,
            backend,
        })
    }

    /// Configuration this pipeline was built from
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Enabled stages
    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    /// Native description handed to the toolkit
    pub fn spec(&self) -> &PipelineSpec {
        &self.spec
    }

    /// Annotate lines as one batch, returning their sentences in order
    pub fn annotate<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<Vec<AnnotatedSentence>> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let inputs: Vec<PipelineInput> = lines
            .iter()
            .map(|line| {
                self.vendor
                    .tokenize_if_pretokenized(line.as_ref(), self.config.is_tokenized())
            })
            .collect();

        let documents = self.backend.annotate(&inputs)?;
        if documents.len() != inputs.len() {
            return Err(TagError::Bridge(format!(
                "expected {} documents from {}, got {}",
                inputs.len(),
                self.vendor.kind(),
                documents.len()
            )));
        }

        Ok(documents
            .into_iter()
            .flatten()
            .map(|sentence| self.convert_sentence(sentence))
            .collect())
    }

    fn convert_sentence(&self, sentence: NativeSentence) -> AnnotatedSentence {
        sentence
            .into_iter()
            .map(|mut native| {
                let mut token = AnnotatedToken::new();
                for (attribute, field) in self.fields.iter() {
                    if let Some(Some(value)) = native.remove(field) {
                        token.set(attribute, value);
                    }
                }
                token
            })
            .collect()
    }
}
