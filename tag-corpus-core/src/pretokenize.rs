//! Whitespace tokenizer for input that is already tokenized

use serde::Serialize;

/// Tokens of one line plus, for each token, whether whitespace follows it
///
/// The whitespace flags let the toolkit rebuild the original text; they do
/// not affect the flat output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PretokenizedLine {
    /// Tokens in order
    pub words: Vec<String>,
    /// `spaces[i]` is true when whitespace follows `words[i]`
    pub spaces: Vec<bool>,
}

impl PretokenizedLine {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the line has no tokens
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split `input` on whitespace runs
///
/// Every token but the last is followed by a space. The last one is only if
/// `input` itself ends in whitespace.
pub fn pretokenize(input: &str) -> PretokenizedLine {
    let words: Vec<String> = input.split_whitespace().map(str::to_string).collect();
    let trailing = input.chars().next_back().is_some_and(char::is_whitespace);

    let mut spaces = vec![true; words.len()];
    if let Some(last) = spaces.last_mut() {
        *last = trailing;
    }

    PretokenizedLine { words, spaces }
}
