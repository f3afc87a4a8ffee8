use crate::areas::git::BranchSwitcher;
use crate::artifacts::history::store::HistoryStore;
use std::cell::{RefCell, RefMut};

/// Turns short user references into checkouts
///
/// Owns the history store and the collaborator performing the actual switch,
/// plus the writer listings are printed to. Operations are implemented in the
/// `commands` module.
pub struct Resolver<S: HistoryStore, G: BranchSwitcher> {
    store: S,
    git: G,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl<S: HistoryStore, G: BranchSwitcher> Resolver<S, G> {
    pub fn new(store: S, git: G, writer: Box<dyn std::io::Write>) -> Self {
        Resolver {
            store,
            git,
            writer: RefCell::new(writer),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
