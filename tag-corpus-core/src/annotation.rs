//! Annotated sentences and tokens, independent of the producing toolkit

use crate::attribute::Attribute;

/// One token with the attributes the pipeline populated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedToken {
    values: [Option<String>; 4],
}

impl AnnotatedToken {
    /// Token with no attributes set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the token for chaining
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    /// Set an attribute
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.values[attribute.index()] = Some(value.into());
    }

    /// Value of an attribute, if populated
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.values[attribute.index()].as_deref()
    }
}

/// Tokens of one sentence, in original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedSentence {
    tokens: Vec<AnnotatedToken>,
}

impl AnnotatedSentence {
    /// Sentence from tokens
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }

    /// Tokens in original order
    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<AnnotatedToken> for AnnotatedSentence {
    fn from_iter<T: IntoIterator<Item = AnnotatedToken>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
