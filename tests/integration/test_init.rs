//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_init_creates_config() -> Result<()> {
  let temp = tempfile::TempDir::new()?;

  run_sdk_relay(temp.path(), &["init", "--group", "ai.example.sdk"])?;

  assert!(temp.path().join("relay.toml").exists());
  let config = std::fs::read_to_string(temp.path().join("relay.toml"))?;
  assert!(config.contains("ai.example.sdk"));
  assert!(config.contains("[sdk]"));

  Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
  let temp = tempfile::TempDir::new()?;

  run_sdk_relay(temp.path(), &["init", "--group", "ai.example.sdk"])?;

  let output = run_sdk_relay_raw(temp.path(), &["init", "--group", "ai.other"], &[])?;
  assert!(!output.status.success());

  Ok(())
}

#[test]
fn test_commands_fail_without_config() -> Result<()> {
  let temp = tempfile::TempDir::new()?;

  let output = run_sdk_relay_raw(temp.path(), &["libraries"], &[])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));

  Ok(())
}
