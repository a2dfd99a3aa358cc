//! File reading utilities

use crate::encoding::decode;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// File reader with strict decoding
pub struct FileReader;

impl FileReader {
    /// Read a file and decode it with `encoding`
    pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        decode(&bytes, encoding).with_context(|| format!("Failed to decode file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_8, WINDOWS_1252};
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path, UTF_8).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path, UTF_8);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_legacy_encoding() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin.txt");
        fs::write(&file_path, b"na\xefve caf\xe9").unwrap();

        let result = FileReader::read_text(&file_path, WINDOWS_1252).unwrap();
        assert_eq!(result, "naïve café");
    }

    #[test]
    fn test_read_text_shift_jis() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("ja.txt");
        let (bytes, _, _) = SHIFT_JIS.encode("これはテストです。");
        fs::write(&file_path, &bytes).unwrap();

        let result = FileReader::read_text(&file_path, SHIFT_JIS).unwrap();
        assert_eq!(result, "これはテストです。");
    }

    #[test]
    fn test_read_text_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.txt");
        fs::write(&file_path, b"valid then \xc3\x28 invalid").unwrap();

        let err = FileReader::read_text(&file_path, UTF_8).unwrap_err();
        assert!(err.to_string().contains("Failed to decode file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_text(&file_path, UTF_8).unwrap();
        assert_eq!(content, "");
    }
}
