//! Development-state inspection
//!
//! A module is "in development" when its build file still contains a local
//! `project(...)` reference to *any* registry module, not just its declared
//! dependencies. This is a liveness check against leftover local references
//! before publication.

use crate::core::error::{RelayResult, ResultExt};
use crate::registry::{Library, LibraryRegistry};
use std::fs;
use std::path::Path;

/// Does this library's build file reference any in-repo module?
pub fn is_developing(registry: &LibraryRegistry, root: &Path, library: &Library) -> RelayResult<bool> {
  let path = root.join(library.build_file_path());
  let contents =
    fs::read_to_string(&path).with_context(|| format!("Failed to read build file {}", path.display()))?;

  Ok(
    registry
      .all()
      .iter()
      .any(|other| contents.contains(&other.local_reference())),
  )
}
