//! Flat-text serialization of annotated sentences
//!
//! One line per sentence. Tokens are joined by a single space, and the
//! attributes of a token are joined by the configured separator, e.g.
//! `The|DET cat|NOUN sleeps|VERB`.

use crate::annotation::AnnotatedSentence;
use crate::attribute::AttributeSet;
use crate::error::{Result, TagError};

/// Default separator between attributes of one token
pub const DEFAULT_SEPARATOR: &str = "|";

/// Serializes sentences with a fixed attribute order and separator
#[derive(Debug, Clone)]
pub struct Formatter {
    attributes: AttributeSet,
    separator: String,
}

impl Formatter {
    /// Formatter for `attributes`, joined by `separator`
    pub fn new(attributes: AttributeSet, separator: impl Into<String>) -> Self {
        Self {
            attributes,
            separator: separator.into(),
        }
    }

    /// Render sentences, one per line, with a trailing newline
    pub fn format(&self, sentences: &[AnnotatedSentence]) -> Result<String> {
        let mut lines = Vec::with_capacity(sentences.len());

        for (sentence_idx, sentence) in sentences.iter().enumerate() {
            let mut tokens = Vec::with_capacity(sentence.len());

            for (token_idx, token) in sentence.tokens().iter().enumerate() {
                let values = self
                    .attributes
                    .iter()
                    .map(|attribute| {
                        token
                            .get(attribute)
                            .ok_or_else(|| TagError::MissingAttribute {
                                attribute: attribute.to_string(),
                                sentence: sentence_idx,
                                token: token_idx,
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                tokens.push(values.join(&self.separator));
            }

            lines.push(tokens.join(" "));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(AttributeSet::default(), DEFAULT_SEPARATOR)
    }
}

/// Render `sentences` with `attributes` joined by `sep`
pub fn format(sentences: &[AnnotatedSentence], attributes: &AttributeSet, sep: &str) -> Result<String> {
    Formatter::new(attributes.clone(), sep).format(sentences)
}
