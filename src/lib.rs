//! Recency-ordered branch switching on top of `git checkout`.
//!
//! Every successful checkout made through this crate is written to a small,
//! bounded history kept inside the repository's git directory. Entries can be
//! addressed later by their position in that history instead of by name.
//!
//! - `areas`: stateful components (history file, git collaborator, resolver)
//! - `artifacts`: plain data types shared by the components
//! - `commands`: user-facing operations implemented on the resolver

pub mod areas;
pub mod artifacts;
pub mod commands;
