//! Operator yes/no gate
//!
//! The single-library release path is the one place a human decision gates
//! the pipeline. The decision sits behind a trait so commands can inject a
//! pre-recorded answer (from a CLI flag, or in tests) instead of blocking on
//! stdin.

use crate::core::error::{RelayResult, ResultExt};
use std::io::{self, BufRead, Write};

/// A blocking yes/no question
pub trait Prompt {
  fn confirm(&mut self, question: &str) -> RelayResult<bool>;
}

/// Interactive prompt reading y/n from stdin, re-asking on other input.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
  fn confirm(&mut self, question: &str) -> RelayResult<bool> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
      print!("{} (y/n): ", question);
      io::stdout().flush().context("Failed to flush stdout")?;

      let answer = match lines.next() {
        Some(line) => line.context("Failed to read from stdin")?,
        None => return Ok(false), // stdin closed; treat as decline
      };

      match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => return Ok(true),
        "n" | "no" => return Ok(false),
        _ => println!("Input yes or no"),
      }
    }
  }
}

/// Pre-recorded decision, for `--use-distributed` and tests.
pub struct PresetPrompt {
  answer: bool,
}

impl PresetPrompt {
  pub fn new(answer: bool) -> Self {
    Self { answer }
  }
}

impl Prompt for PresetPrompt {
  fn confirm(&mut self, _question: &str) -> RelayResult<bool> {
    Ok(self.answer)
  }
}
