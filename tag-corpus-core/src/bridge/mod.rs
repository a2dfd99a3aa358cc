//! Python subprocess hosting spaCy or stanza
//!
//! One child process is started per run and kept alive for every batch, so
//! models are loaded once. See [`protocol`] for the message format.

use crate::error::{Result, TagError};
use crate::pipeline::{Backend, NativeDocument};
use crate::vendor::{PipelineInput, PipelineSpec};
use protocol::{AnnotateRequest, HostErrorKind, Reply};
use serde::Serialize;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Stdio};

pub mod protocol;
pub mod python_env;

pub use python_env::{find_python, PythonEnvironment, PYTHON_ENV_VAR};

const HOST_SCRIPT: &str = include_str!("host.py");

/// Running toolkit host
pub struct PythonBridge {
    child: Child,
    stdin: Option<BufWriter<ChildStdin>>,
    stdout: BufReader<ChildStdout>,
    model: String,
}

impl PythonBridge {
    /// Start the host and wait until the pipeline described by `spec` is loaded
    pub fn spawn(python: &PythonEnvironment, spec: &PipelineSpec) -> Result<Self> {
        log::debug!("Starting toolkit host with {python}");

        let mut child = python
            .command()
            .arg("-u")
            .arg("-c")
            .arg(HOST_SCRIPT)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| TagError::Bridge(format!("failed to start {python}: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| TagError::Bridge("toolkit host has no stdin".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| TagError::Bridge("toolkit host has no stdout".to_string()))?;

        let mut bridge = Self {
            child,
            stdin: Some(BufWriter::new(stdin)),
            stdout: BufReader::new(stdout),
            model: spec.model.clone(),
        };

        bridge.send(spec)?;
        match bridge.receive()? {
            Reply::Ready => {
                log::info!("Loaded {} pipeline '{}'", spec.vendor, spec.model);
                Ok(bridge)
            }
            Reply::Error { kind, message } => Err(bridge.host_error(kind, message)),
            Reply::Ok { .. } => Err(TagError::Bridge(
                "toolkit host sent documents before it was ready".to_string(),
            )),
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| TagError::Bridge("toolkit host input is closed".to_string()))?;
        serde_json::to_writer(&mut *stdin, message)?;
        stdin.write_all(b"\n")?;
        stdin.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<Reply> {
        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            let status = self.child.wait()?;
            return Err(TagError::Bridge(format!(
                "toolkit host exited unexpectedly ({status})"
            )));
        }
        Ok(serde_json::from_str(&line)?)
    }

    fn host_error(&self, kind: HostErrorKind, message: String) -> TagError {
        match kind {
            HostErrorKind::ModelUnavailable => TagError::ModelUnavailable {
                model: self.model.clone(),
                reason: message,
            },
            HostErrorKind::Annotation => TagError::Bridge(message),
        }
    }
}

impl Backend for PythonBridge {
    fn annotate(&mut self, inputs: &[PipelineInput]) -> Result<Vec<NativeDocument>> {
        log::debug!("Sending batch of {} lines to toolkit host", inputs.len());
        self.send(&AnnotateRequest { inputs })?;

        match self.receive()? {
            Reply::Ok { documents } => Ok(documents),
            Reply::Error { kind, message } => Err(self.host_error(kind, message)),
            Reply::Ready => Err(TagError::Bridge(
                "toolkit host answered a batch with a ready message".to_string(),
            )),
        }
    }
}

impl Drop for PythonBridge {
    fn drop(&mut self) {
        // Closing stdin ends the host's read loop.
        drop(self.stdin.take());
        if let Err(e) = self.child.wait() {
            log::warn!("Failed to wait for toolkit host: {e}");
        }
    }
}
