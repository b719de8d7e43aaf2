//! Flat `key=value` properties file access
//!
//! A line is a version entry only if splitting on `=` yields exactly two
//! parts. Everything else (comments, blanks, lines with multiple `=`) is
//! preserved byte-for-byte and in position on rewrite, line terminators
//! included.

use crate::core::error::{RelayResult, ResultExt};
use crate::utils::write_file_atomic;
use std::fs;
use std::path::{Path, PathBuf};

/// Accessor for one properties file
pub struct PropertiesStore {
  path: PathBuf,
}

impl PropertiesStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Value of the first entry whose key matches, or `None`.
  pub fn get_version(&self, version_key: &str) -> RelayResult<Option<String>> {
    let content = fs::read_to_string(&self.path)
      .with_context(|| format!("Failed to read properties from {}", self.path.display()))?;

    for line in content.lines() {
      if let Some((key, value)) = parse_entry(line)
        && key == version_key
      {
        return Ok(Some(value.to_string()));
      }
    }

    Ok(None)
  }

  /// Rewrite the file with the matching entry's value replaced.
  ///
  /// Returns `false` without touching the file when no entry matches; callers
  /// decide whether a missed bump is worth a warning. The rewrite goes through
  /// a temp file and rename, so the original is never observable half-written.
  pub fn set_version(&self, version_key: &str, new_version: &str) -> RelayResult<bool> {
    let content = fs::read_to_string(&self.path)
      .with_context(|| format!("Failed to read properties from {}", self.path.display()))?;

    let mut updated = String::with_capacity(content.len());
    let mut changed = false;

    for segment in content.split_inclusive('\n') {
      let (line, terminator) = split_terminator(segment);
      match parse_entry(line) {
        Some((key, _)) if key == version_key => {
          updated.push_str(key);
          updated.push('=');
          updated.push_str(new_version);
          updated.push_str(terminator);
          changed = true;
        }
        _ => updated.push_str(segment),
      }
    }

    if !changed {
      return Ok(false);
    }

    write_file_atomic(&self.path, &updated)?;
    Ok(true)
  }
}

/// Split a line into `(key, value)` if it contains exactly one `=`.
fn parse_entry(line: &str) -> Option<(&str, &str)> {
  let parts: Vec<&str> = line.split('=').collect();
  if parts.len() != 2 {
    return None;
  }
  Some((parts[0], parts[1]))
}

/// Separate a `split_inclusive('\n')` segment into content and terminator,
/// keeping `\r\n` intact.
fn split_terminator(segment: &str) -> (&str, &str) {
  if let Some(stripped) = segment.strip_suffix("\r\n") {
    (stripped, "\r\n")
  } else if let Some(stripped) = segment.strip_suffix('\n') {
    (stripped, "\n")
  } else {
    (segment, "")
  }
}
