use crate::areas::git::BranchSwitcher;
use crate::areas::resolver::Resolver;
use crate::artifacts::branch::check_checkout_target;
use crate::artifacts::branch::reference::Reference;
use crate::artifacts::core::error::{CheckoutError, Result};
use crate::artifacts::history::store::HistoryStore;

impl<S: HistoryStore, G: BranchSwitcher> Resolver<S, G> {
    /// Branch name at position `ordinal` of the current history
    ///
    /// Out-of-range ordinals are always an error; they are never clamped.
    pub fn resolve_ordinal(&self, ordinal: i64) -> Result<String> {
        let history = self.store().load()?;
        let out_of_range = || CheckoutError::IndexOutOfRange {
            index: ordinal,
            len: history.len(),
        };

        let position = usize::try_from(ordinal).map_err(|_| out_of_range())?;
        history
            .get(position)
            .map(|record| record.name().to_string())
            .ok_or_else(out_of_range)
    }

    /// Most recent history entry, i.e. ordinal 0
    pub fn resolve_previous(&self) -> Result<String> {
        self.resolve_ordinal(0).map_err(|e| match e {
            CheckoutError::IndexOutOfRange { .. } => CheckoutError::NoPriorCheckout,
            other => other,
        })
    }

    /// A directly named branch; git decides whether it exists
    pub fn resolve_literal(&self, name: &str) -> Result<String> {
        check_checkout_target(name).map_err(CheckoutError::InvalidArgument)?;

        Ok(name.to_string())
    }

    pub fn resolve(&self, reference: &Reference) -> Result<String> {
        match reference {
            Reference::Ordinal(ordinal) => self.resolve_ordinal(*ordinal),
            Reference::Previous => self.resolve_previous(),
            Reference::Literal(name) => self.resolve_literal(name),
        }
    }
}
