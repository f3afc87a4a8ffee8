use crate::artifacts::branch::PREVIOUS_MARKER;

/// What the user typed to identify a checkout target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Position in the history listing, 0 being the most recent
    Ordinal(i64),
    /// The most recent history entry; an alias for `Ordinal(0)`
    Previous,
    /// A branch named directly
    Literal(String),
}

impl Reference {
    /// Classify a positional argument; ordinals come from `-n` instead
    pub fn parse(raw: &str) -> Self {
        if raw == PREVIOUS_MARKER {
            Reference::Previous
        } else {
            Reference::Literal(raw.to_string())
        }
    }
}
