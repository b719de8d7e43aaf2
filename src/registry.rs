//! Library registry: the fixed catalog of publishable modules
//!
//! Each `Library` knows its two reference forms:
//!
//! - local:       `project(':corelib')`
//! - distributed: `"ai.example:core:${sdk_version}"`
//!
//! The distributed form carries a version *placeholder*, never a literal
//! number; the placeholder resolves against the properties file at build time.
//! Descriptors are constructed once from relay.toml and never mutated.

use crate::core::config::RelayConfig;
use crate::core::error::{ConfigError, RelayError, RelayResult};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// One publishable module and its derived reference strings
#[derive(Debug, Clone)]
pub struct Library {
  /// Gradle module directory name, unique registry key
  pub module: String,

  /// Artifact name once published
  pub artifact: String,

  /// Properties-file key for this module's version; may be shared
  pub version_key: String,

  /// Maven group, carried from [sdk] config
  pub group: String,
}

impl Library {
  /// In-repo dependency declaration: `project(':module')`
  pub fn local_reference(&self) -> String {
    format!("project(':{}')", self.module)
  }

  /// Version placeholder resolved from the properties file: `${version_key}`
  pub fn version_placeholder(&self) -> String {
    format!("${{{}}}", self.version_key)
  }

  /// Published dependency declaration, quotes included:
  /// `"group:artifact:${version_key}"`
  pub fn distributed_reference(&self) -> String {
    format!("\"{}:{}:{}\"", self.group, self.artifact, self.version_placeholder())
  }

  /// Location of this module's build descriptor, relative to the workspace root
  pub fn build_file_path(&self) -> PathBuf {
    PathBuf::from(&self.module).join("build.gradle")
  }
}

/// JSON-friendly snapshot of a library for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct LibrarySnapshot {
  pub module: String,
  pub artifact: String,
  pub version_key: String,
  pub local_reference: String,
  pub distributed_reference: String,
}

impl LibrarySnapshot {
  pub fn from_library(library: &Library) -> Self {
    Self {
      module: library.module.clone(),
      artifact: library.artifact.clone(),
      version_key: library.version_key.clone(),
      local_reference: library.local_reference(),
      distributed_reference: library.distributed_reference(),
    }
  }
}

/// Insertion-ordered catalog of libraries, keyed by module name.
///
/// Read-only after construction. Iteration order is the declaration order in
/// relay.toml; bulk substitution relies on it being stable.
#[derive(Debug)]
pub struct LibraryRegistry {
  libraries: Vec<Library>,
}

impl LibraryRegistry {
  /// Build the registry from config, rejecting duplicate module names.
  pub fn from_config(config: &RelayConfig) -> RelayResult<Self> {
    let mut seen = HashSet::new();
    let mut libraries = Vec::with_capacity(config.libraries.len());

    for entry in &config.libraries {
      if !seen.insert(entry.module.clone()) {
        return Err(RelayError::Config(ConfigError::DuplicateModule {
          name: entry.module.clone(),
        }));
      }
      libraries.push(Library {
        module: entry.module.clone(),
        artifact: entry.artifact.clone(),
        version_key: entry.version_key.clone(),
        group: config.sdk.group.clone(),
      });
    }

    Ok(Self { libraries })
  }

  /// Look up a library by module name
  pub fn get(&self, module: &str) -> RelayResult<&Library> {
    self
      .libraries
      .iter()
      .find(|l| l.module == module)
      .ok_or_else(|| RelayError::UnknownModule { name: module.to_string() })
  }

  /// All libraries in declaration order
  pub fn all(&self) -> &[Library] {
    &self.libraries
  }

  pub fn len(&self) -> usize {
    self.libraries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.libraries.is_empty()
  }
}
