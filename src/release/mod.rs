//! Release orchestration
//!
//! # Core invariants
//!
//! 1. **Fail fast before irreversible action.** The version bump and the
//!    development-state check happen before the publish command; nothing after
//!    a successful publish is rolled back.
//! 2. **Strictly sequential.** Stages run in declared order, modules within a
//!    stage run in declared order, and the pipeline blocks on each publish
//!    command with no timeout.
//! 3. **Publication is one-way.** An abort leaves on disk exactly what the
//!    completed steps produced; correction happens out-of-band, then re-run.
//!
//! - **pipeline**: the staged bump → check → publish → repoint state machine
//! - **runner**: blocking shell command execution behind an injectable trait
//! - **prompt**: yes/no operator gate for the single-library path
//! - **version**: release version resolution (explicit or tag-derived)
//! - **state**: last-release metadata written back to relay.toml

pub mod pipeline;
pub mod prompt;
pub mod runner;
pub mod state;
pub mod version;

pub use pipeline::{AbortReason, PipelineOutcome, ReleasePipeline};
pub use runner::{CommandRunner, ShellRunner};
