//! Core building blocks for sdk-relay operations
//!
//! - **config**: relay.toml parsing, validation, and persistence
//! - **context**: unified SDK context built once and shared across commands
//! - **error**: error types with contextual help messages and exit codes

pub mod config;
pub mod context;
pub mod error;
