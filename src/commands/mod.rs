//! User-facing operations, implemented on the [`Resolver`](crate::areas::resolver::Resolver)
//!
//! - `resolve`: turn an ordinal, the previous marker or a name into a branch
//! - `switch`: check out a resolved branch and record it
//! - `branch`: create a described branch, check it out and record it
//! - `list`: print the numbered history
//!
//! A checkout is only recorded after git reports success, so a failed switch
//! never changes the history.

pub mod branch;
pub mod list;
pub mod resolve;
pub mod switch;
