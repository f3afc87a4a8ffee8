use crate::areas::git::BranchSwitcher;
use crate::areas::resolver::Resolver;
use crate::artifacts::core::error::Result;
use crate::artifacts::core::table::write_history_table;
use crate::artifacts::history::store::HistoryStore;
use std::io::Write;

impl<S: HistoryStore, G: BranchSwitcher> Resolver<S, G> {
    /// Print the numbered history, most recent first
    pub fn list(&self) -> Result<()> {
        let records = self.store().list()?;

        let mut writer = self.writer();
        write_history_table(&mut **writer, &records)?;
        writer.flush()?;

        Ok(())
    }
}
