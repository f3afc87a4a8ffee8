//! Stateful components
//!
//! - `git`: the external collaborator performing real checkouts
//! - `history`: the file-backed checkout history
//! - `resolver`: ties a history store and a collaborator together; the
//!   operations themselves live in `commands`

pub mod git;
pub mod history;
pub mod resolver;

#[cfg(test)]
pub(crate) mod scripted;
