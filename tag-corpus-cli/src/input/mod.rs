//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod source;

pub use file_reader::FileReader;
pub use glob_resolver::collect_files;
pub use source::InputSource;

/// Line terminators recognised when splitting input text
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Whitespace for trimming: Unicode white space plus the information
/// separators U+001C..U+001F
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lines of `text` with surrounding whitespace removed, blank lines dropped
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split(LINE_BREAKS)
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty())
        .collect()
}
