//! Checkout history
//!
//! - `checkout_record`: one recorded checkout (branch name and description)
//! - `checkout_history`: the bounded, most-recent-first sequence of records
//! - `descriptions`: the unbounded branch name to description catalog
//! - `store`: the persistence contract every history backend implements
//! - `memory`: an in-process store, used where nothing should touch disk

pub mod checkout_record;
pub mod checkout_history;
pub mod descriptions;
pub mod memory;
pub mod store;
