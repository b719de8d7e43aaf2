//! External command execution
//!
//! The pipeline treats the build tool as an opaque "run command, get
//! success/failure" collaborator behind the `CommandRunner` trait, so tests
//! can substitute a scripted runner.

use crate::core::error::{RelayResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs a shell-style command string, blocking until it exits.
pub trait CommandRunner {
  /// Returns whether the command reported success. `Err` is reserved for
  /// failures to launch the command at all.
  fn run(&mut self, command: &str) -> RelayResult<bool>;
}

/// Production runner: `sh -c <command>` with inherited stdio.
/// Blocks indefinitely; a hung build command hangs the pipeline.
pub struct ShellRunner {
  cwd: PathBuf,
}

impl ShellRunner {
  pub fn new(cwd: impl Into<PathBuf>) -> Self {
    Self { cwd: cwd.into() }
  }
}

impl CommandRunner for ShellRunner {
  fn run(&mut self, command: &str) -> RelayResult<bool> {
    println!("▶️  {}", command);

    let status = Command::new("sh")
      .arg("-c")
      .arg(command)
      .current_dir(&self.cwd)
      .status()
      .with_context(|| format!("Failed to launch command: {}", command))?;

    Ok(status.success())
  }
}
