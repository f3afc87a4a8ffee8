use crate::areas::git::BranchSwitcher;
use crate::areas::resolver::Resolver;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::{CheckoutError, Result};
use crate::artifacts::history::store::HistoryStore;

impl<S: HistoryStore, G: BranchSwitcher> Resolver<S, G> {
    /// Create `name` at HEAD, check it out and record it with `description`
    ///
    /// Every created branch must carry a description.
    pub fn create_branch(&self, name: &str, description: &str) -> Result<()> {
        let branch_name = BranchName::try_parse(name)?;

        if description.trim().is_empty() {
            return Err(CheckoutError::InvalidArgument(
                "branch description cannot be empty".to_string(),
            ));
        }

        // refuse before git runs if stored state cannot be read
        self.store().load()?;
        self.store().load_descriptions()?;

        self.git().create_and_checkout(branch_name.as_ref())?;
        self.store().describe(branch_name.as_ref(), description)?;
        self.store().record(branch_name.as_ref(), description)?;

        tracing::debug!(branch = %branch_name, "created branch");
        Ok(())
    }
}
