use crate::artifacts::history::checkout_record::CheckoutRecord;
use std::collections::VecDeque;

/// Bounded checkout history, most recent first
///
/// Index 0 is always the latest checkout. The history never holds more than
/// `limit` records and never starts with two records for the same branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    records: VecDeque<CheckoutRecord>,
    limit: usize,
}

impl History {
    pub fn empty(limit: usize) -> Self {
        History {
            records: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Build a history from records that are already ordered by recency
    ///
    /// Anything past `limit` is dropped.
    pub fn from_records(records: impl IntoIterator<Item = CheckoutRecord>, limit: usize) -> Self {
        History {
            records: records.into_iter().take(limit).collect(),
            limit,
        }
    }

    /// Put a new checkout in front of the history
    ///
    /// If the branch is already the most recent entry, that entry is replaced
    /// instead of duplicated. The oldest entries are evicted on overflow.
    pub fn record(&mut self, record: CheckoutRecord) {
        if self
            .latest()
            .is_some_and(|latest| latest.name() == record.name())
        {
            self.records.pop_front();
        }

        self.records.push_front(record);
        self.records.truncate(self.limit);
    }

    pub fn get(&self, ordinal: usize) -> Option<&CheckoutRecord> {
        self.records.get(ordinal)
    }

    pub fn latest(&self) -> Option<&CheckoutRecord> {
        self.records.front()
    }

    /// Most recent non-empty description recorded for a branch
    pub fn description_of(&self, name: &str) -> Option<&str> {
        self.records
            .iter()
            .filter(|record| record.name() == name)
            .map(CheckoutRecord::description)
            .find(|description| !description.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckoutRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn into_records(self) -> Vec<CheckoutRecord> {
        self.records.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn record(name: &str, description: &str) -> CheckoutRecord {
        CheckoutRecord::new(name.to_string(), description.to_string())
    }

    fn names(history: &History) -> Vec<&str> {
        history.iter().map(CheckoutRecord::name).collect()
    }

    #[test]
    fn records_are_listed_most_recent_first() {
        let mut history = History::empty(10);

        history.record(record("a", "d1"));
        history.record(record("b", "d2"));
        history.record(record("c", "d3"));

        assert_eq!(
            history.into_records(),
            vec![record("c", "d3"), record("b", "d2"), record("a", "d1")]
        );
    }

    #[test]
    fn recording_latest_branch_again_collapses() {
        let mut history = History::empty(10);

        history.record(record("a", "d1"));
        history.record(record("b", "d2"));
        history.record(record("b", "d2"));

        assert_eq!(history.len(), 2);
        assert_eq!(names(&history), vec!["b", "a"]);
    }

    #[test]
    fn recording_older_branch_keeps_earlier_entry() {
        let mut history = History::empty(10);

        history.record(record("a", "d1"));
        history.record(record("b", "d2"));
        history.record(record("a", "d1"));

        assert_eq!(names(&history), vec!["a", "b", "a"]);
    }

    #[test]
    fn overflow_evicts_oldest_entry() {
        let mut history = History::empty(3);
        for name in ["a", "b", "c"] {
            history.record(record(name, ""));
        }

        history.record(record("d", "new"));

        assert_eq!(history.len(), 3);
        assert_eq!(names(&history), vec!["d", "c", "b"]);
        assert_eq!(history.latest(), Some(&record("d", "new")));
    }

    #[test]
    fn from_records_truncates_to_limit() {
        let records = (0..15).map(|i| record(&format!("b{i}"), ""));
        let history = History::from_records(records, 10);

        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0).map(CheckoutRecord::name), Some("b0"));
        assert_eq!(history.get(9).map(CheckoutRecord::name), Some("b9"));
        assert!(history.get(10).is_none());
    }

    #[test]
    fn description_of_skips_plain_switches() {
        let history = History::from_records(
            vec![record("a", ""), record("b", "d2"), record("a", "d1")],
            10,
        );

        assert_eq!(history.description_of("a"), Some("d1"));
        assert_eq!(history.description_of("b"), Some("d2"));
        assert_eq!(history.description_of("c"), None);
    }

    proptest! {
        #[test]
        fn history_never_exceeds_limit(
            limit in 1usize..12,
            names in proptest::collection::vec("[a-e]", 0..40)
        ) {
            let mut history = History::empty(limit);
            for name in &names {
                history.record(record(name, ""));
                prop_assert!(history.len() <= limit);
            }
        }

        #[test]
        fn latest_record_is_the_last_one_recorded(
            names in proptest::collection::vec("[a-e]", 1..40)
        ) {
            let mut history = History::empty(10);
            for name in &names {
                history.record(record(name, ""));
                prop_assert_eq!(history.latest().map(CheckoutRecord::name), Some(name.as_str()));
            }
        }

        #[test]
        fn no_leading_duplicates(
            names in proptest::collection::vec("[a-c]", 2..40)
        ) {
            let mut history = History::empty(10);
            for name in &names {
                history.record(record(name, ""));
                if history.len() >= 2 {
                    prop_assert_ne!(history.get(0).map(CheckoutRecord::name), history.get(1).map(CheckoutRecord::name));
                }
            }
        }
    }
}
