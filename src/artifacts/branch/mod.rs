pub mod branch_name;
pub mod reference;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^-|^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|^@$|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Marker that resolves to the most recent checkout
pub const PREVIOUS_MARKER: &str = "-";

/// Reject names that cannot be handed to `git checkout` as a branch
///
/// A leading `-` would be parsed by git as an option.
pub fn check_checkout_target(name: &str) -> Result<(), String> {
    if name.is_empty() {
        Err("branch name cannot be empty".to_string())
    } else if name.starts_with('-') {
        Err(format!("branch name cannot start with '-': {name}"))
    } else {
        Ok(())
    }
}
