//! Keyword list loading

use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Loads keywords from a file, one per line.
///
/// Lines are trimmed and blank lines dropped; order and duplicates are
/// preserved as given. A missing file is not an error: a warning is logged
/// and an empty list returned so redaction can continue with the structural
/// patterns alone. Read failures on an existing file propagate.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        warn!("keyword file not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scrub-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_yields_empty_list() {
        let dir = temp_dir();

        let keywords = load_keywords(&dir.join("keywords.txt")).unwrap();
        assert!(keywords.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_lines_are_trimmed_and_blanks_dropped() {
        let dir = temp_dir();
        let path = dir.join("keywords.txt");
        std::fs::write(&path, "apollo\n\n  Zephyr  \n\t\nproject-x\n").unwrap();

        let keywords = load_keywords(&path).unwrap();
        assert_eq!(keywords, vec!["apollo", "Zephyr", "project-x"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let dir = temp_dir();
        let path = dir.join("keywords.txt");
        std::fs::write(&path, "beta\nalpha\nbeta\n").unwrap();

        let keywords = load_keywords(&path).unwrap();
        assert_eq!(keywords, vec!["beta", "alpha", "beta"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
