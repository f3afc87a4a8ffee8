//! Test doubles for the resolver's collaborators

use crate::areas::git::BranchSwitcher;
use crate::areas::resolver::Resolver;
use crate::artifacts::core::error::{CheckoutError, Result};
use crate::artifacts::history::checkout_history::History;
use crate::artifacts::history::checkout_record::CheckoutRecord;
use crate::artifacts::history::memory::MemoryHistory;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io::Write;
use std::rc::Rc;

/// Switcher that knows a fixed set of branches and remembers every call
#[derive(Debug, Default)]
pub struct ScriptedSwitcher {
    branches: RefCell<HashSet<String>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedSwitcher {
    pub fn with_branches(branches: &[&str]) -> Self {
        ScriptedSwitcher {
            branches: RefCell::new(branches.iter().map(|b| b.to_string()).collect()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl BranchSwitcher for ScriptedSwitcher {
    fn checkout(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("checkout {name}"));

        if self.branches.borrow().contains(name) {
            Ok(())
        } else {
            Err(CheckoutError::ExternalCommandFailed(format!(
                "pathspec '{name}' did not match any file(s) known to git"
            )))
        }
    }

    fn create_and_checkout(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("checkout -b {name}"));

        if self.branches.borrow_mut().insert(name.to_string()) {
            Ok(())
        } else {
            Err(CheckoutError::ExternalCommandFailed(format!(
                "a branch named '{name}' already exists"
            )))
        }
    }
}

/// Writer whose contents stay readable after being boxed
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub type TestResolver = Resolver<MemoryHistory, ScriptedSwitcher>;

/// Resolver over an in-memory history seeded with `(name, description)` pairs,
/// most recent first
pub fn resolver_with(records: &[(&str, &str)], branches: &[&str]) -> (TestResolver, SharedBuffer) {
    let history = History::from_records(
        records
            .iter()
            .map(|(name, description)| CheckoutRecord::new(name.to_string(), description.to_string())),
        10,
    );
    let buffer = SharedBuffer::default();
    let resolver = Resolver::new(
        MemoryHistory::with_history(history),
        ScriptedSwitcher::with_branches(branches),
        Box::new(buffer.clone()),
    );

    (resolver, buffer)
}

pub fn listed(resolver: &TestResolver) -> Vec<(String, String)> {
    use crate::artifacts::history::store::HistoryStore;

    resolver
        .store()
        .list()
        .expect("memory history never fails")
        .into_iter()
        .map(|r| (r.name().to_string(), r.description().to_string()))
        .collect()
}
