use crate::artifacts::core::error::Result;
use crate::artifacts::history::checkout_history::History;
use crate::artifacts::history::checkout_record::CheckoutRecord;
use crate::artifacts::history::descriptions::Descriptions;

/// Persistence contract for the checkout history
///
/// Backends only need to know how to load and save a whole [`History`];
/// recording and listing are expressed on top of those two.
pub trait HistoryStore {
    /// Maximum number of records kept
    fn limit(&self) -> usize;

    /// Read the persisted history, or an empty one if nothing was saved yet
    fn load(&self) -> Result<History>;

    /// Durably replace the persisted history
    fn save(&self, history: &History) -> Result<()>;

    /// Read the branch description catalog, empty if nothing was saved yet
    fn load_descriptions(&self) -> Result<Descriptions>;

    /// Durably replace the branch description catalog
    fn save_descriptions(&self, descriptions: &Descriptions) -> Result<()>;

    /// Remember the description of a branch beyond history eviction
    fn describe(&self, name: &str, description: &str) -> Result<()> {
        let mut descriptions = self.load_descriptions()?;
        descriptions.insert(name, description);
        self.save_descriptions(&descriptions)
    }

    /// Best known description for a branch
    ///
    /// The catalog is consulted first, then the history itself for branches
    /// that were recorded before they had a catalog entry.
    fn description_of(&self, name: &str) -> Result<String> {
        let descriptions = self.load_descriptions()?;
        if let Some(description) = descriptions.get(name) {
            return Ok(description.to_string());
        }

        let history = self.load()?;
        Ok(history.description_of(name).unwrap_or_default().to_string())
    }

    /// Add a successful checkout and persist the pruned result
    ///
    /// Must only be called once the checkout itself has succeeded.
    fn record(&self, name: &str, description: &str) -> Result<History> {
        let mut history = self.load()?;
        history.record(CheckoutRecord::new(
            name.to_string(),
            description.to_string(),
        ));
        self.save(&history)?;

        tracing::debug!(
            branch = name,
            entries = history.len(),
            "recorded checkout"
        );

        Ok(history)
    }

    /// Current history in recency order, at most [`limit`](Self::limit) entries
    fn list(&self) -> Result<Vec<CheckoutRecord>> {
        let limit = self.limit();
        let history = self.load()?;

        Ok(history.into_records().into_iter().take(limit).collect())
    }
}
