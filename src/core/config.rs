use crate::core::error::{ConfigError, RelayError, RelayResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for sdk-relay
/// Searched in order: relay.toml, .relay.toml, .config/relay.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
  pub sdk: SdkConfig,
  #[serde(default)]
  pub libraries: Vec<LibraryConfig>,
  #[serde(default)]
  pub release: ReleaseSettings,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state: Option<ReleaseState>,
}

/// Repository-wide SDK settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
  /// Maven group of the published artifacts (e.g. "ai.example")
  pub group: String,

  /// Properties file holding the version keys (default: "gradle.properties")
  #[serde(default = "default_properties_file")]
  pub properties_file: PathBuf,

  /// Application build descriptor repointed alongside the libraries, if any
  #[serde(default)]
  pub app_build_file: Option<PathBuf>,

  /// Release tag prefix (default: "sdk"); tags look like `<prefix>-<version>`
  #[serde(default = "default_tag_prefix")]
  pub tag_prefix: String,

  /// Publish command template; `{module}` is replaced with the module name
  #[serde(default = "default_publish_command")]
  pub publish_command: String,
}

fn default_properties_file() -> PathBuf {
  PathBuf::from("gradle.properties")
}

fn default_tag_prefix() -> String {
  "sdk".to_string()
}

fn default_publish_command() -> String {
  "./gradlew :{module}:publish".to_string()
}

/// One publishable Gradle module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
  /// Gradle module directory name (unique across the registry)
  pub module: String,

  /// Artifact name once published
  pub artifact: String,

  /// Key in the properties file holding this module's version
  /// (may be shared, e.g. a core library and its umbrella share one key)
  pub version_key: String,
}

/// Release orchestration settings
///
/// # Example
///
/// ```toml
/// [release]
/// stages = [["corelib"], ["visionlib"]]
/// pinned = ["tensorflowlite"]
/// models = ["visionlabelmodelfast"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReleaseSettings {
  /// Ordered build stages; each stage is a non-empty group of module names
  #[serde(default)]
  pub stages: Vec<Vec<String>>,

  /// Modules repointed to their distributed references before the first stage
  /// (prebuilt artifacts that are never built from source during a release)
  #[serde(default)]
  pub pinned: Vec<String>,

  /// Modules released by `sdk-relay release models`, each at its current
  /// properties-file version
  #[serde(default)]
  pub models: Vec<String>,
}

/// Metadata written back after a successful full release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseState {
  pub last_version: String,
  pub last_date: String,
}

impl RelayConfig {
  /// Find config file in search order: relay.toml, .relay.toml, .config/relay.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("relay.toml"),
      path.join(".relay.toml"),
      path.join(".config").join("relay.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from relay.toml (searches multiple locations)
  pub fn load(path: &Path) -> RelayResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      RelayError::Config(ConfigError::NotFound {
        workspace_root: path.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: RelayConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .validate()
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Save config to relay.toml (default location)
  pub fn save(&self, path: &Path) -> RelayResult<()> {
    let config_path = path.join("relay.toml");
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(())
  }

  /// Check if config exists at the given path
  pub fn exists(path: &Path) -> bool {
    Self::find_config_path(path).is_some()
  }

  /// Validate the configuration
  pub fn validate(&self) -> RelayResult<()> {
    if self.sdk.group.is_empty() {
      return Err(RelayError::Config(ConfigError::MissingField {
        field: "sdk.group".to_string(),
      }));
    }

    if !self.sdk.publish_command.contains("{module}") {
      return Err(RelayError::with_help(
        format!(
          "Publish command '{}' has no {{module}} placeholder",
          self.sdk.publish_command
        ),
        "The command is run once per module; include {module} where the module name belongs.",
      ));
    }

    for (index, stage) in self.release.stages.iter().enumerate() {
      if stage.is_empty() {
        return Err(RelayError::message(format!(
          "Release stage {} is empty; every stage must name at least one module",
          index + 1
        )));
      }
    }

    Ok(())
  }

  /// Create a starter config for `sdk-relay init`
  pub fn starter(group: impl Into<String>) -> Self {
    Self {
      sdk: SdkConfig {
        group: group.into(),
        properties_file: default_properties_file(),
        app_build_file: Some(PathBuf::from("app/build.gradle")),
        tag_prefix: default_tag_prefix(),
        publish_command: default_publish_command(),
      },
      libraries: Vec::new(),
      release: ReleaseSettings::default(),
      state: None,
    }
  }
}
