use crate::areas::git::BranchSwitcher;
use crate::areas::resolver::Resolver;
use crate::artifacts::branch::reference::Reference;
use crate::artifacts::core::error::Result;
use crate::artifacts::history::store::HistoryStore;

impl<S: HistoryStore, G: BranchSwitcher> Resolver<S, G> {
    /// Check out `name` and record it, keeping any description it already had
    pub fn switch_to(&self, name: &str) -> Result<()> {
        let name = self.resolve_literal(name)?;

        // unreadable state must stop us before git moves HEAD
        let description = self.store().description_of(&name)?;

        self.git().checkout(&name)?;
        self.store().record(&name, &description)?;

        tracing::debug!(branch = %name, "switched");
        Ok(())
    }

    pub fn switch_ordinal(&self, ordinal: i64) -> Result<()> {
        let name = self.resolve_ordinal(ordinal)?;
        self.switch_to(&name)
    }

    pub fn switch_reference(&self, reference: &Reference) -> Result<()> {
        let name = self.resolve(reference)?;
        self.switch_to(&name)
    }
}
