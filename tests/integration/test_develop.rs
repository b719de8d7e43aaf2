//! Tests for the `develop` and `hosted` commands

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_hosted_converts_local_references() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  run_sdk_relay(&sdk.path, &["hosted"])?;

  let vision = sdk.read_file("visionlib/build.gradle")?;
  assert!(!vision.contains("project(':corelib')"));
  assert!(vision.contains("\"ai.example.sdk:core:${sdk_version}\""));

  Ok(())
}

#[test]
fn test_develop_converts_distributed_references() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;
  sdk.add_module(
    "visionlib",
    "dependencies {\n    api \"ai.example.sdk:core:${sdk_version}\"\n}\n",
  )?;

  run_sdk_relay(&sdk.path, &["develop"])?;

  let vision = sdk.read_file("visionlib/build.gradle")?;
  assert!(vision.contains("project(':corelib')"));
  assert!(!vision.contains("ai.example.sdk:core"));

  Ok(())
}

#[test]
fn test_hosted_then_develop_round_trips() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;
  let before = sdk.read_file("visionlib/build.gradle")?;

  run_sdk_relay(&sdk.path, &["hosted"])?;
  run_sdk_relay(&sdk.path, &["develop"])?;

  assert_eq!(sdk.read_file("visionlib/build.gradle")?, before);
  Ok(())
}

#[test]
fn test_develop_leaves_unrelated_dependencies_alone() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;
  let build = "dependencies {\n    api \"com.squareup.retrofit2:retrofit:2.9.0\"\n}\n";
  sdk.add_module("corelib", build)?;

  run_sdk_relay(&sdk.path, &["develop"])?;

  assert_eq!(sdk.read_file("corelib/build.gradle")?, build);
  Ok(())
}
