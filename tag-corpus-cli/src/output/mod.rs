//! Output handling module

use crate::encoding::encode;
use crate::error::CliError;
use crate::input::InputSource;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};

/// Where formatted text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A single file
    File(PathBuf),
    /// A directory mirroring the input directory
    Directory(PathBuf),
}

impl OutputTarget {
    /// Pick the target for `input`: a directory input always writes to a
    /// directory
    pub fn resolve(output_item: Option<&Path>, input: &InputSource) -> Result<Self> {
        let Some(path) = output_item else {
            return Ok(OutputTarget::Stdout);
        };

        match input {
            InputSource::Directory(_) => {
                if path.is_file() {
                    return Err(CliError::ConfigError(format!(
                        "input_item is a directory, so output_item must be a directory, \
                         but {} is a file",
                        path.display()
                    ))
                    .into());
                }
                Ok(OutputTarget::Directory(path.to_path_buf()))
            }
            InputSource::File(_) | InputSource::Literal(_) => {
                if path.is_dir() {
                    return Err(CliError::ConfigError(format!(
                        "output_item {} is a directory, but the input is a single text",
                        path.display()
                    ))
                    .into());
                }
                Ok(OutputTarget::File(path.to_path_buf()))
            }
        }
    }

    /// Output path for `input_file` read from under `input_root`
    ///
    /// `None` means standard output.
    pub fn path_for(&self, input_root: &Path, input_file: &Path) -> Result<Option<PathBuf>> {
        match self {
            OutputTarget::Stdout => Ok(None),
            OutputTarget::File(path) => Ok(Some(path.clone())),
            OutputTarget::Directory(root) => {
                let relative = input_file.strip_prefix(input_root).with_context(|| {
                    format!(
                        "{} is not inside {}",
                        input_file.display(),
                        input_root.display()
                    )
                })?;
                Ok(Some(root.join(relative)))
            }
        }
    }
}

/// Write `text` to `path` in `encoding`, creating parent directories
pub fn write_encoded(path: &Path, text: &str, encoding: &'static Encoding) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let bytes = encode(text, encoding)
        .with_context(|| format!("Failed to encode output for: {}", path.display()))?;
    fs::write(path, bytes).with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use tempfile::TempDir;

    #[test]
    fn test_no_output_is_stdout() {
        let input = InputSource::Literal("x".to_string());
        assert_eq!(OutputTarget::resolve(None, &input).unwrap(), OutputTarget::Stdout);
    }

    #[test]
    fn test_directory_input_gives_directory_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = InputSource::Directory(temp_dir.path().to_path_buf());
        let out = temp_dir.path().join("out");

        assert_eq!(
            OutputTarget::resolve(Some(&out), &input).unwrap(),
            OutputTarget::Directory(out)
        );
    }

    #[test]
    fn test_directory_input_with_file_output_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("out.txt");
        fs::write(&existing, "").unwrap();
        let input = InputSource::Directory(temp_dir.path().to_path_buf());

        assert!(OutputTarget::resolve(Some(&existing), &input).is_err());
    }

    #[test]
    fn test_single_input_with_directory_output_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let input = InputSource::Literal("x".to_string());
        assert!(OutputTarget::resolve(Some(temp_dir.path()), &input).is_err());
    }

    #[test]
    fn test_path_for_mirrors_relative_path() {
        let target = OutputTarget::Directory(PathBuf::from("/out"));
        let path = target
            .path_for(Path::new("/in"), Path::new("/in/sub/b.txt"))
            .unwrap();
        assert_eq!(path, Some(PathBuf::from("/out/sub/b.txt")));
    }

    #[test]
    fn test_path_for_file_and_stdout() {
        let file = OutputTarget::File(PathBuf::from("result.txt"));
        assert_eq!(
            file.path_for(Path::new("in.txt"), Path::new("in.txt")).unwrap(),
            Some(PathBuf::from("result.txt"))
        );
        assert_eq!(
            OutputTarget::Stdout
                .path_for(Path::new("in.txt"), Path::new("in.txt"))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_write_encoded_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a/b/c.txt");

        write_encoded(&path, "Hello|INTJ\n", UTF_8).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello|INTJ\n");
    }

    #[test]
    fn test_write_encoded_legacy_encoding() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin.txt");

        write_encoded(&path, "café\n", WINDOWS_1252).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"caf\xe9\n");
    }

    #[test]
    fn test_write_encoded_unmappable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin.txt");

        let err = write_encoded(&path, "東京\n", WINDOWS_1252).unwrap_err();
        assert!(err.to_string().contains("Failed to encode output"));
        assert!(!path.exists());
    }
}
