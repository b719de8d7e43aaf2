//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway Gradle SDK repository
pub struct TestSdk {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestSdk {
  /// Create a repository with two libraries sharing one version key.
  ///
  /// `publish_command` must contain `{module}`; tests use `"true {module}"`
  /// or `"false {module}"` to script publish success and failure.
  pub fn new(publish_command: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::write(
      path.join("relay.toml"),
      format!(
        r#"[sdk]
group = "ai.example.sdk"
publish_command = "{}"

[[libraries]]
module = "corelib"
artifact = "core"
version_key = "sdk_version"

[[libraries]]
module = "visionlib"
artifact = "vision"
version_key = "sdk_version"

[release]
stages = [["corelib"], ["visionlib"]]
"#,
        publish_command
      ),
    )?;

    std::fs::write(path.join("gradle.properties"), "sdk_version=1.0.0\n")?;

    let sdk = Self { _root: root, path };
    sdk.add_module("corelib", "dependencies {\n}\n")?;
    sdk.add_module(
      "visionlib",
      "dependencies {\n    api project(':corelib')\n}\n",
    )?;

    Ok(sdk)
  }

  /// Create a module directory with the given build.gradle contents
  pub fn add_module(&self, name: &str, build_gradle: &str) -> Result<()> {
    let module_path = self.path.join(name);
    std::fs::create_dir_all(&module_path)?;
    std::fs::write(module_path.join("build.gradle"), build_gradle)?;
    Ok(())
  }

  pub fn read_file(&self, path: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(path)).with_context(|| format!("Failed to read {}", path))
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }
}

/// Run the sdk-relay binary, failing the test if it exits non-zero
pub fn run_sdk_relay(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_sdk_relay_raw(cwd, args, &[])?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "sdk-relay command failed: sdk-relay {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the sdk-relay binary and hand back the raw output, exit status included
pub fn run_sdk_relay_raw(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_sdk-relay");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("GITHUB_REF")
    .envs(envs.iter().copied())
    .output()
    .context("Failed to run sdk-relay")
}

pub fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}
