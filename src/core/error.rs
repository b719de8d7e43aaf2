//! Error types for sdk-relay with contextual messages and exit codes
//!
//! A unified error type that categorizes failures and carries a help message
//! pointing the operator at a fix.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for sdk-relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, unknown modules, bad version source)
  User = 1,
  /// System error (publish command, I/O)
  System = 2,
  /// Validation failure (module still in development)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for sdk-relay
#[derive(Debug)]
pub enum RelayError {
  /// Configuration errors
  Config(ConfigError),

  /// Module name not present in the library registry
  UnknownModule { name: String },

  /// A module scheduled for publication still references in-repo modules
  StillDeveloping { module: String },

  /// The external publish command reported failure
  PublishFailed { module: String },

  /// No explicit release version and the fallback source is absent or malformed
  InvalidVersionSource { reason: String },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl RelayError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelayError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    RelayError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      RelayError::Message { message, context, help } => RelayError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelayError::Config(_) => ExitCode::User,
      RelayError::UnknownModule { .. } => ExitCode::User,
      RelayError::StillDeveloping { .. } => ExitCode::Validation,
      RelayError::PublishFailed { .. } => ExitCode::System,
      RelayError::InvalidVersionSource { .. } => ExitCode::User,
      RelayError::Io(_) => ExitCode::System,
      RelayError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelayError::Config(e) => e.help_message(),
      RelayError::UnknownModule { .. } => {
        Some("List configured modules with `sdk-relay libraries`.".to_string())
      }
      RelayError::StillDeveloping { module } => Some(format!(
        "Repoint '{}' (and everything else) at published artifacts with `sdk-relay hosted`, then retry.",
        module
      )),
      RelayError::PublishFailed { .. } => {
        Some("Inspect the publish command output above. Earlier stages are not rolled back.".to_string())
      }
      RelayError::InvalidVersionSource { .. } => {
        Some("Pass the version explicitly with --version, or set GITHUB_REF to refs/tags/<prefix>-<semver>.".to_string())
      }
      RelayError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for RelayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelayError::Config(e) => write!(f, "{}", e),
      RelayError::UnknownModule { name } => {
        write!(f, "Module '{}' not found in the library registry", name)
      }
      RelayError::StillDeveloping { module } => {
        write!(f, "Module '{}' still has dependencies in development", module)
      }
      RelayError::PublishFailed { module } => {
        write!(f, "Module '{}' was not successfully published", module)
      }
      RelayError::InvalidVersionSource { reason } => {
        write!(f, "No release version detected: {}", reason)
      }
      RelayError::Io(e) => write!(f, "I/O error: {}", e),
      RelayError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for RelayError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelayError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for RelayError {
  fn from(err: io::Error) -> Self {
    RelayError::Io(err)
  }
}

impl From<String> for RelayError {
  fn from(msg: String) -> Self {
    RelayError::message(msg)
  }
}

impl From<&str> for RelayError {
  fn from(msg: &str) -> Self {
    RelayError::message(msg)
  }
}

impl From<toml_edit::TomlError> for RelayError {
  fn from(err: toml_edit::TomlError) -> Self {
    RelayError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for RelayError {
  fn from(err: toml_edit::de::Error) -> Self {
    RelayError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for RelayError {
  fn from(err: toml_edit::ser::Error) -> Self {
    RelayError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for RelayError {
  fn from(err: serde_json::Error) -> Self {
    RelayError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// relay.toml not found
  NotFound { workspace_root: PathBuf },

  /// Missing or invalid required field
  MissingField { field: String },

  /// Two [[libraries]] entries share a module name
  DuplicateModule { name: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Run `sdk-relay init` to create a configuration file.".to_string()),
      ConfigError::DuplicateModule { name } => Some(format!(
        "Each [[libraries]] entry needs a unique `module`; '{}' appears more than once in relay.toml.",
        name
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { workspace_root } => {
        write!(
          f,
          "No sdk-relay configuration found.\nExpected file: {}/relay.toml",
          workspace_root.display()
        )
      }
      ConfigError::MissingField { field } => {
        write!(f, "Missing required field in config: {}", field)
      }
      ConfigError::DuplicateModule { name } => {
        write!(f, "Duplicate module '{}' in library registry", name)
      }
    }
  }
}

/// Result type alias for sdk-relay
pub type RelayResult<T> = Result<T, RelayError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> RelayResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelayResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelayError>,
{
  fn context(self, ctx: impl Into<String>) -> RelayResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> RelayResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelayError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
