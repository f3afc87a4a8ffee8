use crate::artifacts::core::error::{CheckoutError, Result};

/// Environment variable overriding the history bound
pub const HISTORY_LIMIT_ENV: &str = "GCO_HISTORY_LIMIT";

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "GCO_LOG";

/// Number of checkouts kept when nothing else is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Directory (inside the git dir) holding this tool's state
pub const STATE_DIR: &str = "gco";

/// File name of the checkout history inside [`STATE_DIR`]
pub const HISTORY_FILE: &str = "history";

/// File name of the branch description catalog inside [`STATE_DIR`]
pub const DESCRIPTIONS_FILE: &str = "branches";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let history_limit = match lookup(HISTORY_LIMIT_ENV) {
            Some(raw) => parse_history_limit(&raw)?,
            None => DEFAULT_HISTORY_LIMIT,
        };

        Ok(Settings { history_limit })
    }
}

fn parse_history_limit(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(CheckoutError::InvalidArgument(format!(
            "{HISTORY_LIMIT_ENV} must be a positive integer, got '{raw}'"
        ))),
    }
}
