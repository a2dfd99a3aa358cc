//! Annotation pipeline adapter for spaCy and stanza
//!
//! This crate maps a small, vendor-neutral configuration (which attributes
//! to output, whether input is pretokenized, whether to split sentences) onto
//! a toolkit pipeline, runs it through a long-lived Python host, and
//! serializes the result as flat text: one sentence per line, tokens
//! separated by spaces, token attributes joined by a separator.
//!
//! ```no_run
//! use tag_corpus_core::{find_python, AttributeSet, Formatter, Pipeline, PipelineConfig, VendorKind};
//!
//! let attributes = AttributeSet::parse(&["text", "pos"])?;
//! let config = PipelineConfig::builder(VendorKind::Spacy, "en_core_web_sm")
//!     .attributes(attributes.clone())
//!     .build()?;
//! let mut pipeline = Pipeline::build(config, &find_python(None)?)?;
//! let sentences = pipeline.annotate(&["The cat sat on the mat."])?;
//! print!("{}", Formatter::new(attributes, "|").format(&sentences)?);
//! # Ok::<(), tag_corpus_core::TagError>(())
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod attribute;
pub mod bridge;
pub mod config;
pub mod error;
pub mod formatter;
pub mod pipeline;
pub mod pretokenize;
pub mod vendor;

// Re-export key types
pub use annotation::{AnnotatedSentence, AnnotatedToken};
pub use attribute::{Attribute, AttributeSet};
pub use bridge::{find_python, PythonEnvironment};
pub use config::{PipelineConfig, PipelineConfigBuilder, ProcessCount, VendorKind};
pub use error::{Result, TagError};
pub use formatter::{format, Formatter, DEFAULT_SEPARATOR};
pub use pipeline::{Backend, Pipeline};
pub use vendor::{PipelineInput, PipelineSpec, Stage, StageSet, Vendor};
