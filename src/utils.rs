//! Small filesystem utilities

use crate::core::error::{RelayResult, ResultExt};
use std::io::Write;
use std::path::Path;

/// Write a file atomically: stage the content in a temp file in the same
/// directory, then rename over the target. A concurrent reader sees either
/// the old content or the new content, never a partial write.
pub fn write_file_atomic(path: &Path, contents: &str) -> RelayResult<()> {
  let dir = path.parent().unwrap_or_else(|| Path::new("."));

  let mut tmp = tempfile::NamedTempFile::new_in(dir)
    .with_context(|| format!("Failed to create temp file next to {}", path.display()))?;
  tmp
    .write_all(contents.as_bytes())
    .with_context(|| format!("Failed to write staged content for {}", path.display()))?;
  tmp
    .persist(path)
    .map_err(|e| e.error)
    .with_context(|| format!("Failed to replace {}", path.display()))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_atomic_write_creates_and_replaces() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");

    write_file_atomic(&path, "first").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

    write_file_atomic(&path, "second").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
  }

  #[test]
  fn test_atomic_write_leaves_no_temp_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    write_file_atomic(&path, "content").unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
  }
}
