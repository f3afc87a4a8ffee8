//! Plain data types shared by the stateful components
//!
//! - `branch`: branch name validation and reference parsing
//! - `core`: errors, settings and output rendering
//! - `history`: checkout records, the bounded history and its store contract

pub mod branch;
pub mod core;
pub mod history;
