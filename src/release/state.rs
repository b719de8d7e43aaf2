//! Last-release metadata
//!
//! After a successful full release the tool records what it shipped and when
//! under `[state]` in relay.toml, so the next operator can see the current
//! anchor without digging through tags.

use crate::core::config::{RelayConfig, ReleaseState};
use crate::core::error::RelayResult;
use chrono::Utc;
use std::path::Path;

/// Record a completed release and persist the config.
pub fn record_release(config: &mut RelayConfig, workspace_root: &Path, version: &str) -> RelayResult<()> {
  config.state = Some(ReleaseState {
    last_version: version.to_string(),
    last_date: Utc::now().to_rfc3339(),
  });
  config.save(workspace_root)
}
