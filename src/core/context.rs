//! Unified SDK context - build once, pass everywhere
//!
//! SdkContext bundles the workspace root, the parsed relay.toml, and the
//! library registry built from it. main.rs constructs it once and hands a
//! reference to every command, so no command re-reads configuration.

use crate::core::config::RelayConfig;
use crate::core::error::RelayResult;
use crate::registry::LibraryRegistry;
use std::path::{Path, PathBuf};

/// Shared state for a single sdk-relay invocation
#[derive(Debug)]
pub struct SdkContext {
  /// Workspace root directory (where relay.toml was found)
  pub root: PathBuf,

  /// Parsed relay.toml
  pub config: RelayConfig,

  /// Library registry derived from the config; immutable after construction
  pub registry: LibraryRegistry,
}

impl SdkContext {
  /// Build the context from a workspace root.
  ///
  /// Loads relay.toml and constructs the registry; duplicate module names in
  /// the config are fatal here, before any command runs.
  pub fn build(workspace_root: &Path) -> RelayResult<Self> {
    let config = RelayConfig::load(workspace_root)?;
    let registry = LibraryRegistry::from_config(&config)?;

    Ok(Self {
      root: workspace_root.to_path_buf(),
      config,
      registry,
    })
  }

  /// Absolute path of the properties file
  pub fn properties_path(&self) -> PathBuf {
    self.root.join(&self.config.sdk.properties_file)
  }

  /// Absolute path of the application build descriptor, if configured
  pub fn app_build_path(&self) -> Option<PathBuf> {
    self.config.sdk.app_build_file.as_ref().map(|p| self.root.join(p))
  }
}
