//! Recursive file discovery using glob

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Every regular file under `root`, recursively, in lexicographic path order
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*", escaped_root.trim_end_matches('/'));

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    let paths =
        glob_with(&pattern, options).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    for path_result in paths {
        let path = path_result
            .with_context(|| format!("Error walking directory: {}", root.display()))?;

        if path.is_file() {
            files.push(path);
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}
