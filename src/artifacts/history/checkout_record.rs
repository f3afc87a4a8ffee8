use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single successful checkout
///
/// Records are immutable once created; recency is encoded by their position
/// in the [`History`](super::checkout_history::History) rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CheckoutRecord {
    name: String,
    #[serde(default)]
    description: String,
}

impl CheckoutRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
