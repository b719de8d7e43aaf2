//! The staged release pipeline
//!
//! For each stage, for each module: bump the version entry, check the module
//! is not still in development, run the publish command, then repoint every
//! other build file at the just-published artifact so later stages build
//! against it. First failure anywhere aborts the whole run; earlier stages
//! stay published and repointed.

use crate::core::context::SdkContext;
use crate::core::error::{RelayError, RelayResult};
use crate::gradle::inspect::is_developing;
use crate::gradle::properties::PropertiesStore;
use crate::gradle::substitute::{Direction, LibraryFilter, repoint_workspace};
use crate::registry::Library;
use crate::release::runner::CommandRunner;

/// Why a run stopped early
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
  /// The module's build file still holds local references
  StillDeveloping { module: String },
  /// The external publish command reported failure
  PublishFailed { module: String },
}

impl AbortReason {
  /// Convert into the matching error for CLI reporting
  pub fn into_error(self) -> RelayError {
    match self {
      AbortReason::StillDeveloping { module } => RelayError::StillDeveloping { module },
      AbortReason::PublishFailed { module } => RelayError::PublishFailed { module },
    }
  }
}

/// Terminal state of a pipeline run.
///
/// `Aborted` names the stage it stopped in because everything before it is
/// already published and repointed; there is no rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
  Completed { stages: usize },
  Aborted { stage: usize, reason: AbortReason },
}

/// Ordered, fail-fast publication pipeline over the configured stages.
#[derive(Debug)]
pub struct ReleasePipeline<'a> {
  ctx: &'a SdkContext,
  stages: Vec<Vec<&'a Library>>,
  pinned: Vec<&'a Library>,
}

impl<'a> ReleasePipeline<'a> {
  /// Resolve the configured stage and pinned module names through the
  /// registry. Unknown names and a missing stage list are fatal here, before
  /// anything runs.
  pub fn from_context(ctx: &'a SdkContext) -> RelayResult<Self> {
    if ctx.config.release.stages.is_empty() {
      return Err(RelayError::with_help(
        "No release stages configured",
        "Add `stages = [[...]]` under [release] in relay.toml.",
      ));
    }

    let mut stages = Vec::with_capacity(ctx.config.release.stages.len());
    for stage in &ctx.config.release.stages {
      let mut resolved = Vec::with_capacity(stage.len());
      for module in stage {
        resolved.push(ctx.registry.get(module)?);
      }
      stages.push(resolved);
    }

    let mut pinned = Vec::with_capacity(ctx.config.release.pinned.len());
    for module in &ctx.config.release.pinned {
      pinned.push(ctx.registry.get(module)?);
    }

    Ok(Self { ctx, stages, pinned })
  }

  pub fn stage_count(&self) -> usize {
    self.stages.len()
  }

  /// Run the pipeline: pinned repoint, then per stage, per module:
  /// bump → development check → publish → repoint dependents.
  pub fn run(&self, version: &str, runner: &mut dyn CommandRunner) -> RelayResult<PipelineOutcome> {
    let store = PropertiesStore::new(self.ctx.properties_path());
    let app_build = self.ctx.app_build_path();

    // Prebuilt artifacts are consumed as published dependencies for the whole run.
    for library in &self.pinned {
      self.repoint_to_distributed(library, app_build.as_deref())?;
    }

    for (stage_index, stage) in self.stages.iter().enumerate() {
      for library in stage {
        // The bump is deliberately applied before the development check; an
        // aborted run leaves the bumped version entry behind.
        if !store.set_version(&library.version_key, version)? {
          eprintln!(
            "⚠️  No '{}' entry in {}; version not bumped for '{}'",
            library.version_key,
            store.path().display(),
            library.module
          );
        }

        if is_developing(&self.ctx.registry, &self.ctx.root, library)? {
          return Ok(PipelineOutcome::Aborted {
            stage: stage_index,
            reason: AbortReason::StillDeveloping {
              module: library.module.clone(),
            },
          });
        }

        let command = self.ctx.config.sdk.publish_command.replace("{module}", &library.module);
        if !runner.run(&command)? {
          return Ok(PipelineOutcome::Aborted {
            stage: stage_index,
            reason: AbortReason::PublishFailed {
              module: library.module.clone(),
            },
          });
        }

        // Later stages must build against the artifact just published.
        self.repoint_to_distributed(library, app_build.as_deref())?;
        println!("📦 Published {} ({})", library.module, version);
      }
    }

    Ok(PipelineOutcome::Completed {
      stages: self.stages.len(),
    })
  }

  fn repoint_to_distributed(&self, library: &Library, app_build: Option<&std::path::Path>) -> RelayResult<()> {
    repoint_workspace(
      &self.ctx.registry,
      &self.ctx.root,
      app_build,
      Direction::DevelopToRelease,
      LibraryFilter::One(library),
    )?;
    Ok(())
  }
}
