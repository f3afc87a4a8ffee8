use crate::artifacts::history::checkout_record::CheckoutRecord;
use std::collections::BTreeMap;

/// Description given to every branch created through gco
///
/// Unlike the [`History`](super::checkout_history::History) this is not
/// bounded, so a branch keeps its description after its checkouts have been
/// evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions(BTreeMap<String, String>);

impl Descriptions {
    /// Later records for the same name win
    pub fn from_records(records: impl IntoIterator<Item = CheckoutRecord>) -> Self {
        let mut descriptions = Descriptions::default();
        for record in records {
            descriptions.insert(record.name(), record.description());
        }
        descriptions
    }

    /// Remember `description` for `name`; empty descriptions are ignored
    pub fn insert(&mut self, name: &str, description: &str) {
        if !description.is_empty() {
            self.0.insert(name.to_string(), description.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// One record per branch, ordered by name
    pub fn records(&self) -> impl Iterator<Item = CheckoutRecord> + '_ {
        self.0
            .iter()
            .map(|(name, description)| CheckoutRecord::new(name.clone(), description.clone()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
