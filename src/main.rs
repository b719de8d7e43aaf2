mod commands;
mod core;
mod gradle;
mod registry;
mod release;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use core::error::{RelayError, print_error};

/// Switch Gradle SDK modules between in-repo and published dependencies
#[derive(Parser)]
#[command(name = "sdk-relay")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct RelayCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  // ============================================================================
  // Setup & Inspection
  // ============================================================================
  /// Initialize sdk-relay configuration for an SDK repository
  Init {
    /// Maven group the published artifacts live under (e.g. ai.example.sdk)
    #[arg(long)]
    group: String,
  },

  /// List configured libraries and both of their reference forms
  Libraries {
    /// Output the registry in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Show which modules still reference in-repo sources
  Status {
    /// Output status in JSON format
    #[arg(long)]
    json: bool,
  },

  // ============================================================================
  // Reference switching
  // ============================================================================
  /// Repoint every build file at in-repo modules
  Develop,

  /// Repoint every build file at published artifacts
  Hosted,

  // ============================================================================
  // Release & Publishing
  // ============================================================================
  /// Staged publication pipeline and single-module variants
  #[command(subcommand)]
  Release(ReleaseCommands),
}

#[derive(Subcommand)]
enum ReleaseCommands {
  /// Release every staged library at one SDK version
  Sdk {
    /// Version to release (default: extracted from the GITHUB_REF tag)
    #[arg(long)]
    version: Option<String>,
  },

  /// Release a single library at an explicit version
  Library {
    /// Name of the Gradle module to release
    module: String,
    /// Version to publish
    version: String,
    /// Convert in-development references without prompting
    #[arg(long)]
    use_distributed: bool,
  },

  /// Release every configured model at its current version
  Models {
    /// Convert in-development references without prompting
    #[arg(long)]
    use_distributed: bool,
  },

  /// Commit the version bump and push an annotated release tag
  Tag {
    /// Version to tag
    version: String,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = RelayCli::parse();

  let workspace_root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  // init runs before relay.toml exists, so it skips the context build
  if let Commands::Init { group } = &cli.command {
    if let Err(err) = commands::run_init(&workspace_root, group) {
      handle_error(err);
    }
    return;
  }

  // Build the SDK context once (loads relay.toml, builds the registry)
  let mut ctx = match core::context::SdkContext::build(&workspace_root) {
    Ok(ctx) => ctx,
    Err(err) => handle_error(err),
  };

  let result = match cli.command {
    Commands::Init { .. } => unreachable!("handled above"),

    // Setup & Inspection
    Commands::Libraries { json } => commands::run_libraries(&ctx, json),
    Commands::Status { json } => commands::run_status(&ctx, json),

    // Reference switching
    Commands::Develop => commands::run_develop(&ctx),
    Commands::Hosted => commands::run_hosted(&ctx),

    // Release & Publishing
    Commands::Release(release_cmd) => match release_cmd {
      ReleaseCommands::Sdk { version } => commands::run_release_sdk(&mut ctx, version),
      ReleaseCommands::Library {
        module,
        version,
        use_distributed,
      } => commands::run_release_library(&ctx, &module, &version, use_distributed),
      ReleaseCommands::Models { use_distributed } => commands::run_release_models(&ctx, use_distributed),
      ReleaseCommands::Tag { version } => commands::run_release_tag(&ctx, &version),
    },
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelayError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
