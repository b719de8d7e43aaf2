//! Registry inspection commands

use crate::core::context::SdkContext;
use crate::core::error::RelayResult;
use crate::gradle::inspect::is_developing;
use crate::registry::LibrarySnapshot;
use serde::Serialize;

/// List every configured library with both of its reference forms.
pub fn run_libraries(ctx: &SdkContext, json: bool) -> RelayResult<()> {
  if json {
    let snapshots: Vec<LibrarySnapshot> = ctx.registry.all().iter().map(LibrarySnapshot::from_library).collect();
    println!("{}", serde_json::to_string_pretty(&snapshots)?);
    return Ok(());
  }

  if ctx.registry.is_empty() {
    println!("⚠️  No libraries configured in relay.toml");
    return Ok(());
  }

  println!("📚 SDK libraries ({})", ctx.registry.len());
  for library in ctx.registry.all() {
    println!();
    println!("Module:      {}", library.module);
    println!("Development: {}", library.local_reference());
    println!("Release:     {}", library.distributed_reference());
    println!("Version key: {}", library.version_key);
  }

  Ok(())
}

#[derive(Serialize)]
struct StatusEntry {
  module: String,
  developing: bool,
}

/// Show which modules still reference in-repo sources.
pub fn run_status(ctx: &SdkContext, json: bool) -> RelayResult<()> {
  let mut entries = Vec::with_capacity(ctx.registry.len());
  for library in ctx.registry.all() {
    entries.push(StatusEntry {
      module: library.module.clone(),
      developing: is_developing(&ctx.registry, &ctx.root, library)?,
    });
  }

  if json {
    println!("{}", serde_json::to_string_pretty(&entries)?);
    return Ok(());
  }

  for entry in &entries {
    let icon = if entry.developing { "🔧" } else { "📦" };
    println!("{} {}", icon, entry.module);
  }

  let developing = entries.iter().filter(|e| e.developing).count();
  println!();
  if developing == 0 {
    println!("✅ All modules reference published artifacts");
  } else {
    println!("🔧 {} module(s) still reference in-repo sources", developing);
  }

  Ok(())
}
