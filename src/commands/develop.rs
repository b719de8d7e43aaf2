//! Switch the whole repository between reference styles

use crate::core::context::SdkContext;
use crate::core::error::RelayResult;
use crate::gradle::substitute::{Direction, LibraryFilter, repoint_file, workspace_build_files};
use crate::ui::progress::FileProgress;

/// Repoint every build file at in-repo modules (develop on the libraries).
pub fn run_develop(ctx: &SdkContext) -> RelayResult<()> {
  repoint_all(ctx, Direction::ReleaseToDevelop, "local project")
}

/// Repoint every build file at published artifacts.
pub fn run_hosted(ctx: &SdkContext) -> RelayResult<()> {
  repoint_all(ctx, Direction::DevelopToRelease, "distributed artifact")
}

fn repoint_all(ctx: &SdkContext, direction: Direction, label: &str) -> RelayResult<()> {
  let app_build = ctx.app_build_path();
  let files = workspace_build_files(&ctx.registry, &ctx.root, app_build.as_deref());

  let mut progress = FileProgress::new(files.len(), "Repointing build files");
  let mut changed = 0;

  for path in &files {
    if repoint_file(&ctx.registry, direction, LibraryFilter::All, path)? {
      changed += 1;
    }
    progress.inc();
  }

  println!("🔁 {} of {} build files now use {} references", changed, files.len(), label);
  Ok(())
}
