//! Tests for the `libraries` and `status` commands

use crate::helpers::*;
use anyhow::Result;
use serde_json::Value;

#[test]
fn test_libraries_lists_both_reference_forms() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay(&sdk.path, &["libraries"])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("corelib"));
  assert!(stdout.contains("project(':corelib')"));
  assert!(stdout.contains("\"ai.example.sdk:core:${sdk_version}\""));

  Ok(())
}

#[test]
fn test_libraries_json_output() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay(&sdk.path, &["libraries", "--json"])?;
  let snapshots: Value = serde_json::from_str(&stdout_of(&output))?;

  let entries = snapshots.as_array().expect("array of libraries");
  assert_eq!(entries.len(), 2);
  assert_eq!(entries[0]["module"], "corelib");
  assert_eq!(entries[1]["module"], "visionlib");

  Ok(())
}

#[test]
fn test_status_reports_developing_modules() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay(&sdk.path, &["status", "--json"])?;
  let entries: Value = serde_json::from_str(&stdout_of(&output))?;

  // visionlib depends on the in-repo corelib; corelib has no local references
  assert_eq!(entries[0]["module"], "corelib");
  assert_eq!(entries[0]["developing"], false);
  assert_eq!(entries[1]["module"], "visionlib");
  assert_eq!(entries[1]["developing"], true);

  Ok(())
}

#[test]
fn test_status_after_hosted_shows_no_developing_modules() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  run_sdk_relay(&sdk.path, &["hosted"])?;
  let output = run_sdk_relay(&sdk.path, &["status", "--json"])?;
  let entries: Value = serde_json::from_str(&stdout_of(&output))?;

  assert_eq!(entries[1]["developing"], false);
  Ok(())
}
