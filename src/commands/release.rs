//! Release command implementations
//!
//! - `release sdk`: the full staged pipeline (bump → check → publish →
//!   repoint per module, abort on first failure)
//! - `release library`: one module, with the operator gate when it still
//!   has in-development references
//! - `release models`: every configured model at its current version
//! - `release tag`: commit the properties file and push an annotated tag

use crate::core::context::SdkContext;
use crate::core::error::{RelayError, RelayResult};
use crate::gradle::inspect::is_developing;
use crate::gradle::properties::PropertiesStore;
use crate::gradle::substitute::{Direction, LibraryFilter, repoint_workspace};
use crate::registry::Library;
use crate::release::prompt::{PresetPrompt, Prompt, StdinPrompt};
use crate::release::runner::{CommandRunner, ShellRunner};
use crate::release::state::record_release;
use crate::release::version::resolve_release_version;
use crate::release::{PipelineOutcome, ReleasePipeline};

/// Run the full staged SDK release.
pub fn run_release_sdk(ctx: &mut SdkContext, version: Option<String>) -> RelayResult<()> {
  let version = resolve_release_version(version.as_deref(), &ctx.config.sdk.tag_prefix)?;

  let outcome = {
    let pipeline = ReleasePipeline::from_context(ctx)?;
    println!(
      "🚀 Releasing SDK version {} across {} stage(s)",
      version,
      pipeline.stage_count()
    );

    let mut runner = ShellRunner::new(ctx.root.clone());
    pipeline.run(&version, &mut runner)?
  };

  match outcome {
    PipelineOutcome::Completed { stages } => {
      record_release(&mut ctx.config, &ctx.root, &version)?;
      println!();
      println!("✅ Successfully released version {} ({} stage(s))", version, stages);
      println!();
      println!("Next steps:");
      println!("  sdk-relay release tag {}", version);
      Ok(())
    }
    PipelineOutcome::Aborted { stage, reason } => {
      eprintln!("🛑 Release aborted in stage {}; earlier stages are not rolled back", stage + 1);
      Err(reason.into_error())
    }
  }
}

/// Release a single library at an explicit version.
pub fn run_release_library(ctx: &SdkContext, module: &str, version: &str, use_distributed: bool) -> RelayResult<()> {
  let library = ctx.registry.get(module)?;
  let version = resolve_release_version(Some(version), &ctx.config.sdk.tag_prefix)?;

  let mut runner = ShellRunner::new(ctx.root.clone());
  let mut prompt: Box<dyn Prompt> = if use_distributed {
    Box::new(PresetPrompt::new(true))
  } else {
    Box::new(StdinPrompt)
  };

  release_one(ctx, library, &version, prompt.as_mut(), &mut runner)
}

/// Release every configured model at its current properties-file version.
pub fn run_release_models(ctx: &SdkContext, use_distributed: bool) -> RelayResult<()> {
  if ctx.config.release.models.is_empty() {
    println!("⚠️  No models configured under [release] in relay.toml");
    return Ok(());
  }

  let store = PropertiesStore::new(ctx.properties_path());
  let mut runner = ShellRunner::new(ctx.root.clone());
  let mut prompt: Box<dyn Prompt> = if use_distributed {
    Box::new(PresetPrompt::new(true))
  } else {
    Box::new(StdinPrompt)
  };

  for module in &ctx.config.release.models {
    let library = ctx.registry.get(module)?;
    let version = store.get_version(&library.version_key)?.ok_or_else(|| {
      RelayError::with_help(
        format!(
          "No '{}' entry in {} for model '{}'",
          library.version_key,
          store.path().display(),
          module
        ),
        "Add the version entry to the properties file before releasing models.",
      )
    })?;

    release_one(ctx, library, &version, prompt.as_mut(), &mut runner)?;
  }

  Ok(())
}

/// Bump, publish, and repoint one library. The operator gate fires only when
/// the module still holds in-development references.
fn release_one(
  ctx: &SdkContext,
  library: &Library,
  version: &str,
  prompt: &mut dyn Prompt,
  runner: &mut dyn CommandRunner,
) -> RelayResult<()> {
  if is_developing(&ctx.registry, &ctx.root, library)? {
    println!("🔧 {} has dependencies in development...", library.module);

    if prompt.confirm("Would you like to use distributed dependencies?")? {
      let app_build = ctx.app_build_path();
      repoint_workspace(
        &ctx.registry,
        &ctx.root,
        app_build.as_deref(),
        Direction::DevelopToRelease,
        LibraryFilter::All,
      )?;
    } else {
      println!("Aborting...");
      return Err(RelayError::StillDeveloping {
        module: library.module.clone(),
      });
    }
  }

  let store = PropertiesStore::new(ctx.properties_path());
  if !store.set_version(&library.version_key, version)? {
    eprintln!(
      "⚠️  No '{}' entry in {}; version not bumped",
      library.version_key,
      store.path().display()
    );
  }

  let command = ctx.config.sdk.publish_command.replace("{module}", &library.module);
  if !runner.run(&command)? {
    return Err(RelayError::PublishFailed {
      module: library.module.clone(),
    });
  }

  let app_build = ctx.app_build_path();
  repoint_workspace(
    &ctx.registry,
    &ctx.root,
    app_build.as_deref(),
    Direction::DevelopToRelease,
    LibraryFilter::One(library),
  )?;

  println!("✅ {} ({}) released successfully!", library.module, version);
  Ok(())
}

/// Commit the properties file and push an annotated `<prefix>-<version>` tag.
pub fn run_release_tag(ctx: &SdkContext, version: &str) -> RelayResult<()> {
  let version = resolve_release_version(Some(version), &ctx.config.sdk.tag_prefix)?;
  let tag = format!("{}-{}", ctx.config.sdk.tag_prefix, version);

  let mut runner = ShellRunner::new(ctx.root.clone());
  let steps = [
    format!("git add {}", ctx.config.sdk.properties_file.display()),
    format!("git commit -m \"Bump to version {}\"", version),
    format!("git tag -a {} -m \"Release new version {}\"", tag, version),
    "git push".to_string(),
    "git push --tags".to_string(),
  ];

  for step in &steps {
    if !runner.run(step)? {
      return Err(RelayError::message(format!("Command failed: {}", step)));
    }
  }

  println!("🏷️  Tagged {}", tag);
  Ok(())
}
