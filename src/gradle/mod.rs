//! Gradle-specific operations
//!
//! Everything sdk-relay knows about Gradle lives here, and it is deliberately
//! little: a flat `key=value` properties file, and exact-match substitution of
//! dependency reference strings the registry itself generates. Build files are
//! never parsed.
//!
//! - **properties**: read/write version entries in gradle.properties
//! - **substitute**: flip dependency references between local and distributed
//! - **inspect**: detect leftover local references in a module's build file

pub mod inspect;
pub mod properties;
pub mod substitute;
