//! CLI commands for sdk-relay
//!
//! ## Setup & Inspection
//! - **init**: scaffold relay.toml for an SDK repository
//! - **libraries**: list the registry and both reference forms per module
//! - **status**: show which modules still reference in-repo sources
//!
//! ## Reference switching
//! - **develop**: repoint every build file at in-repo modules
//! - **hosted**: repoint every build file at published artifacts
//!
//! ## Releases
//! - **release sdk / library / models / tag**: staged publication pipeline
//!   and its single-module variants
//!
//! All commands except `init` take a `&SdkContext` built once in main.

pub mod develop;
pub mod init;
pub mod libraries;
pub mod release;

pub use develop::{run_develop, run_hosted};
pub use init::run_init;
pub use libraries::{run_libraries, run_status};
pub use release::{run_release_library, run_release_models, run_release_sdk, run_release_tag};
