//! Release version resolution
//!
//! The version comes either explicitly from the operator or from the
//! `GITHUB_REF` tag reference CI sets, of the form
//! `refs/tags/<tag_prefix>-<semver>`. Resolution fails fast, before any file
//! is mutated.

use crate::core::error::{RelayError, RelayResult};
use std::env;

/// Resolve the release version from an explicit argument or the environment.
pub fn resolve_release_version(explicit: Option<&str>, tag_prefix: &str) -> RelayResult<String> {
  let raw = match explicit {
    Some(version) => version.trim().to_string(),
    None => {
      let github_ref = env::var("GITHUB_REF").map_err(|_| RelayError::InvalidVersionSource {
        reason: "no --version given and GITHUB_REF is not set".to_string(),
      })?;
      extract_from_ref(&github_ref, tag_prefix)?
    }
  };

  semver::Version::parse(&raw).map_err(|e| RelayError::InvalidVersionSource {
    reason: format!("'{}' is not a valid semver version ({})", raw, e),
  })?;

  Ok(raw)
}

/// Pull `<version>` out of a `.../<tag_prefix>-<version>` reference string.
pub fn extract_from_ref(reference: &str, tag_prefix: &str) -> RelayResult<String> {
  let tag = reference.rsplit('/').next().unwrap_or(reference);
  let prefix = format!("{}-", tag_prefix);

  tag
    .strip_prefix(&prefix)
    .map(str::to_string)
    .ok_or_else(|| RelayError::InvalidVersionSource {
      reason: format!("tag '{}' does not start with '{}'", tag, prefix),
    })
}
