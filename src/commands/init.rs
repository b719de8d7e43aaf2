//! Scaffold relay.toml for a new SDK repository

use crate::core::config::RelayConfig;
use crate::core::error::{RelayError, RelayResult};
use std::path::Path;

/// Create a starter relay.toml in the workspace root.
pub fn run_init(workspace_root: &Path, group: &str) -> RelayResult<()> {
  if RelayConfig::exists(workspace_root) {
    return Err(RelayError::with_help(
      "sdk-relay is already configured here",
      "Edit the existing relay.toml instead of re-running init.",
    ));
  }

  let config = RelayConfig::starter(group);
  config.save(workspace_root)?;

  println!("✅ Created relay.toml");
  println!();
  println!("Next steps:");
  println!("  1. Add a [[libraries]] entry per publishable Gradle module:");
  println!("       module = \"corelib\"");
  println!("       artifact = \"core\"");
  println!("       version_key = \"sdk_version\"");
  println!("  2. Declare the build order under [release]:");
  println!("       stages = [[\"corelib\"], [\"visionlib\"]]");
  println!("  3. Verify with `sdk-relay libraries`");

  Ok(())
}
