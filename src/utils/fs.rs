//! Filesystem helpers for writing generated documents.

use std::io;
use std::path::Path;

/// Write `content` to `path`, creating any missing parent directories.
///
/// # Examples
/// ```
/// use tally::utils::fs::write_output;
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("automation/report.md");
/// write_output(&path, "# Report\n").unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report\n");
/// ```
pub fn write_output(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a/b/c/out.md");

        write_output(&path, "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_output_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.md");

        write_output(&path, "first\n").unwrap();
        write_output(&path, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
    }
}
