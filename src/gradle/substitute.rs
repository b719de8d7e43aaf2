//! Dependency reference substitution engine
//!
//! Rewrites build-file text between the two reference styles the registry
//! generates: `project(':module')` and `"group:artifact:${version_key}"`.
//! Substitution is literal, global, and exact-match; build files are treated
//! as opaque text, never parsed.
//!
//! Bulk passes apply the longest search strings first. Literal matching is
//! otherwise vulnerable to one module name being a prefix of another (think
//! `vision` and `visionCV`): a shorter pattern applied first could rewrite the
//! head of the longer one. Longest-first makes bulk substitution independent
//! of registry declaration order.

use crate::core::error::RelayResult;
use crate::registry::{Library, LibraryRegistry};
use crate::utils::write_file_atomic;
use std::fs;
use std::path::{Path, PathBuf};

/// Which reference form is the search target vs. the replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  /// local `project(...)` references become distributed artifact references
  DevelopToRelease,
  /// distributed artifact references become local `project(...)` references
  ReleaseToDevelop,
}

/// Which libraries' references a pass rewrites
#[derive(Clone, Copy)]
pub enum LibraryFilter<'a> {
  /// Only references to this library
  One(&'a Library),
  /// References to every library in the registry
  All,
}

/// Build the (search, replacement) pair for one library, oriented by direction.
fn reference_pair(library: &Library, direction: Direction) -> (String, String) {
  match direction {
    Direction::DevelopToRelease => (library.local_reference(), library.distributed_reference()),
    Direction::ReleaseToDevelop => (library.distributed_reference(), library.local_reference()),
  }
}

/// Pure text substitution: every occurrence of each selected library's search
/// form is replaced with its counterpart. Text in, text out; no file I/O.
pub fn replace(registry: &LibraryRegistry, direction: Direction, filter: LibraryFilter, text: &str) -> String {
  match filter {
    LibraryFilter::One(library) => {
      let (search, replacement) = reference_pair(library, direction);
      text.replace(&search, &replacement)
    }
    LibraryFilter::All => {
      let mut pairs: Vec<(String, String)> = registry
        .all()
        .iter()
        .map(|library| reference_pair(library, direction))
        .collect();
      // Longest search string first; see module docs.
      pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

      let mut result = text.to_string();
      for (search, replacement) in &pairs {
        result = result.replace(search, replacement);
      }
      result
    }
  }
}

/// Read one build file, substitute, and atomically write the result back.
/// Returns whether the file changed; unchanged files are not rewritten.
pub fn repoint_file(
  registry: &LibraryRegistry,
  direction: Direction,
  filter: LibraryFilter,
  path: &Path,
) -> RelayResult<bool> {
  let original = fs::read_to_string(path)?;
  let updated = replace(registry, direction, filter, &original);

  if updated == original {
    return Ok(false);
  }

  write_file_atomic(path, &updated)?;
  Ok(true)
}

/// Every build file a repoint pass touches: each registry module's descriptor
/// plus the application descriptor, when configured.
pub fn workspace_build_files(registry: &LibraryRegistry, root: &Path, app_build_file: Option<&Path>) -> Vec<PathBuf> {
  let mut files: Vec<PathBuf> = registry
    .all()
    .iter()
    .map(|library| root.join(library.build_file_path()))
    .collect();

  if let Some(app) = app_build_file {
    files.push(app.to_path_buf());
  }

  files
}

/// Apply one substitution pass across the whole workspace.
/// Returns the number of files that changed.
pub fn repoint_workspace(
  registry: &LibraryRegistry,
  root: &Path,
  app_build_file: Option<&Path>,
  direction: Direction,
  filter: LibraryFilter,
) -> RelayResult<usize> {
  let mut changed = 0;
  for path in workspace_build_files(registry, root, app_build_file) {
    if repoint_file(registry, direction, filter, &path)? {
      changed += 1;
    }
  }
  Ok(changed)
}
