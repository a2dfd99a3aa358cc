//! Messages exchanged with the toolkit host
//!
//! Newline-delimited JSON. The first message we send is the
//! [`PipelineSpec`](crate::vendor::PipelineSpec); every later one is an
//! [`AnnotateRequest`]. Each is answered by exactly one [`Reply`].

use crate::pipeline::NativeDocument;
use crate::vendor::PipelineInput;
use serde::{Deserialize, Serialize};

/// Batch of lines to annotate
#[derive(Debug, Serialize)]
pub struct AnnotateRequest<'a> {
    /// One entry per line, in order
    pub inputs: &'a [PipelineInput],
}

/// Failure category reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostErrorKind {
    /// The toolkit could not load the model
    ModelUnavailable,
    /// The toolkit failed on a batch
    Annotation,
}

/// One reply line from the host
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reply {
    /// Pipeline loaded
    Ready,
    /// Annotated documents, one per input line
    Ok {
        /// Documents in input order
        documents: Vec<NativeDocument>,
    },
    /// Loading or annotation failed
    Error {
        /// What failed
        kind: HostErrorKind,
        /// Exception text from the toolkit
        message: String,
    },
}
