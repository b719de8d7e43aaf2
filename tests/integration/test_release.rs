//! Tests for the `release` command family

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_release_sdk_completes_all_stages() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  run_sdk_relay(&sdk.path, &["release", "sdk", "--version", "2.0.0"])?;

  let props = sdk.read_file("gradle.properties")?;
  assert_eq!(props, "sdk_version=2.0.0\n");

  // stage 1 repoints visionlib at the published corelib before stage 2 runs
  let vision = sdk.read_file("visionlib/build.gradle")?;
  assert!(vision.contains("\"ai.example.sdk:core:${sdk_version}\""));
  assert!(!vision.contains("project(':"));

  let config = sdk.read_file("relay.toml")?;
  assert!(config.contains("last_version = \"2.0.0\""));

  Ok(())
}

#[test]
fn test_release_sdk_aborts_when_module_still_developing() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;
  // no earlier stage repoints corelib, so this reference survives to its check
  sdk.add_module(
    "corelib",
    "dependencies {\n    api project(':visionlib')\n}\n",
  )?;

  let output = run_sdk_relay_raw(&sdk.path, &["release", "sdk", "--version", "2.0.0"], &[])?;
  assert_eq!(output.status.code(), Some(3));

  // the bump lands before the development check
  let props = sdk.read_file("gradle.properties")?;
  assert_eq!(props, "sdk_version=2.0.0\n");
  assert!(!sdk.read_file("relay.toml")?.contains("last_version"));

  Ok(())
}

#[test]
fn test_release_sdk_publish_failure_exits_with_system_code() -> Result<()> {
  let sdk = TestSdk::new("false {module}")?;

  let output = run_sdk_relay_raw(&sdk.path, &["release", "sdk", "--version", "2.0.0"], &[])?;
  assert_eq!(output.status.code(), Some(2));

  Ok(())
}

#[test]
fn test_release_sdk_takes_version_from_github_ref() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay_raw(
    &sdk.path,
    &["release", "sdk"],
    &[("GITHUB_REF", "refs/tags/sdk-3.1.0")],
  )?;
  assert!(output.status.success());
  assert_eq!(sdk.read_file("gradle.properties")?, "sdk_version=3.1.0\n");

  Ok(())
}

#[test]
fn test_release_sdk_rejects_unprefixed_ref() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay_raw(
    &sdk.path,
    &["release", "sdk"],
    &[("GITHUB_REF", "refs/tags/v3.1.0")],
  )?;
  assert_eq!(output.status.code(), Some(1));
  assert_eq!(sdk.read_file("gradle.properties")?, "sdk_version=1.0.0\n");

  Ok(())
}

#[test]
fn test_release_sdk_rejects_invalid_version() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay_raw(&sdk.path, &["release", "sdk", "--version", "not-a-version"], &[])?;
  assert_eq!(output.status.code(), Some(1));

  Ok(())
}

#[test]
fn test_release_library_with_use_distributed() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  run_sdk_relay(
    &sdk.path,
    &["release", "library", "visionlib", "2.5.0", "--use-distributed"],
  )?;

  assert_eq!(sdk.read_file("gradle.properties")?, "sdk_version=2.5.0\n");
  assert!(!sdk.read_file("visionlib/build.gradle")?.contains("project(':"));

  Ok(())
}

#[test]
fn test_release_library_unknown_module_fails() -> Result<()> {
  let sdk = TestSdk::new("true {module}")?;

  let output = run_sdk_relay_raw(
    &sdk.path,
    &["release", "library", "nosuchlib", "2.0.0", "--use-distributed"],
    &[],
  )?;
  assert_eq!(output.status.code(), Some(1));

  Ok(())
}
