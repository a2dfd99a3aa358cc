//! Token attributes that can be requested in the output

use crate::error::{Result, TagError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-token annotation that can be written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Surface form of the token
    Text,
    /// Part-of-speech tag
    Pos,
    /// Dependency relation to the head
    Dep,
    /// Lemma
    Lemma,
}

impl Attribute {
    /// All attributes, in their canonical order
    pub const ALL: [Attribute; 4] = [
        Attribute::Text,
        Attribute::Pos,
        Attribute::Dep,
        Attribute::Lemma,
    ];

    /// Name used on the command line and in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Text => "text",
            Attribute::Pos => "pos",
            Attribute::Dep => "dep",
            Attribute::Lemma => "lemma",
        }
    }

    /// Slot of this attribute in fixed-size per-token storage
    pub(crate) fn index(&self) -> usize {
        match self {
            Attribute::Text => 0,
            Attribute::Pos => 1,
            Attribute::Dep => 2,
            Attribute::Lemma => 3,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Attribute::Text),
            "pos" => Ok(Attribute::Pos),
            "dep" => Ok(Attribute::Dep),
            "lemma" => Ok(Attribute::Lemma),
            other => Err(TagError::Config(format!(
                "unknown attribute '{other}' (expected one of: text, pos, dep, lemma)"
            ))),
        }
    }
}

/// Non-empty, ordered set of requested attributes
///
/// The order is the order in which values are joined for every token.
/// Repeated attributes keep their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    /// Build a set from attributes in output order
    pub fn new<I>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Attribute>,
    {
        let mut ordered: Vec<Attribute> = Vec::with_capacity(Attribute::ALL.len());
        for attribute in attributes {
            if !ordered.contains(&attribute) {
                ordered.push(attribute);
            }
        }

        if ordered.is_empty() {
            return Err(TagError::Config(
                "at least one formatter attribute is required".to_string(),
            ));
        }

        Ok(Self {
            attributes: ordered,
        })
    }

    /// Parse attribute names such as `["text", "pos"]`
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let attributes = names
            .iter()
            .map(|name| name.as_ref().parse::<Attribute>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(attributes)
    }

    /// Whether `attribute` was requested
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Attributes in output order
    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes.iter().copied()
    }

    /// Number of requested attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            attributes: vec![Attribute::Text],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let set = AttributeSet::parse(&["lemma", "text", "dep"]).unwrap();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Attribute::Lemma, Attribute::Text, Attribute::Dep]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let set = AttributeSet::parse(&["pos", "text", "pos"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next(), Some(Attribute::Pos));
    }

    #[test]
    fn test_empty_set_rejected() {
        let result = AttributeSet::parse::<&str>(&[]);
        assert!(matches!(result, Err(TagError::Config(_))));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let result = AttributeSet::parse(&["text", "ner"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("unknown attribute 'ner'"));
    }

    #[test]
    fn test_default_is_text_only() {
        let set = AttributeSet::default();
        assert!(set.contains(Attribute::Text));
        assert!(!set.contains(Attribute::Pos));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 4];
        for attribute in Attribute::ALL {
            assert!(!seen[attribute.index()]);
            seen[attribute.index()] = true;
        }
    }
}
