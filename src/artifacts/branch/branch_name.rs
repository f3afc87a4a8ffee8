use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::artifacts::core::error::{CheckoutError, Result};

/// Name for a branch that is about to be created
///
/// Enforces git's ref-name rules up front so an invalid name is reported
/// before git is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(CheckoutError::InvalidArgument(
                "branch name cannot be empty".to_string(),
            ));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX).map_err(|e| {
            CheckoutError::InvalidArgument(format!("invalid branch name regex: {e}"))
        })?;

        if re.is_match(name) {
            Err(CheckoutError::InvalidArgument(format!(
                "invalid branch name: {name}"
            )))
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
