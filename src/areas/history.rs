//! File-backed checkout history
//!
//! State lives in `<git dir>/gco/` as two JSON Lines files, one record per
//! line:
//!
//! - `history`: recent checkouts, most recent first, bounded
//! - `branches`: the description of every branch created through gco, ordered
//!   by name and never evicted
//!
//! ```text
//! {"name":"feature/login","description":"login form validation"}
//! {"name":"main","description":""}
//! ```
//!
//! A missing file is empty. A file that exists but cannot be read or parsed is
//! reported as unavailable rather than silently discarded.

use crate::artifacts::branch::check_checkout_target;
use crate::artifacts::core::error::{CheckoutError, Result};
use crate::artifacts::core::settings::{DESCRIPTIONS_FILE, HISTORY_FILE, STATE_DIR};
use crate::artifacts::history::checkout_history::History;
use crate::artifacts::history::checkout_record::CheckoutRecord;
use crate::artifacts::history::descriptions::Descriptions;
use crate::artifacts::history::store::HistoryStore;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, new)]
pub struct HistoryFile {
    /// Path to the history file itself
    path: Box<Path>,
    /// Path to the branch description catalog
    descriptions_path: Box<Path>,
    limit: usize,
}

impl HistoryFile {
    pub fn in_git_dir(git_dir: &Path, limit: usize) -> Self {
        let state_dir = git_dir.join(STATE_DIR);

        HistoryFile::new(
            state_dir.join(HISTORY_FILE).into_boxed_path(),
            state_dir.join(DESCRIPTIONS_FILE).into_boxed_path(),
            limit,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn descriptions_path(&self) -> &Path {
        &self.descriptions_path
    }
}

/// Records stored at `path`, or `None` when the file does not exist
fn read_records(path: &Path) -> Result<Option<Vec<CheckoutRecord>>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no state file yet");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| CheckoutError::storage(path, e))?;

    parse_records(path, &content)
        .map(Some)
        .inspect_err(|e| {
            tracing::warn!(path = %path.display(), "refusing to use state file: {e}");
        })
}

fn parse_records(path: &Path, content: &str) -> Result<Vec<CheckoutRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str::<CheckoutRecord>(line)
            .map_err(|e| CheckoutError::storage(path, format!("line {}: {e}", line_no + 1)))?;

        // a stored name is fed back to git on `-` and `-n`
        check_checkout_target(record.name())
            .map_err(|reason| CheckoutError::storage(path, format!("line {}: {reason}", line_no + 1)))?;

        records.push(record);
    }

    Ok(records)
}

fn write_records<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a CheckoutRecord>,
) -> Result<()> {
    let mut content = String::new();
    for record in records {
        let line = serde_json::to_string(record)
            .map_err(|e| CheckoutError::InvalidArgument(format!("unserializable record: {e}")))?;
        content.push_str(&line);
        content.push('\n');
    }

    // create the state directory on first write
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CheckoutError::storage(path, e))?;
    }

    let mut state_file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| CheckoutError::storage(path, e))?;
    let mut lock = file_guard::lock(&mut state_file, Lock::Exclusive, 0, 1)
        .map_err(|e| CheckoutError::storage(path, e))?;
    lock.deref_mut()
        .write_all(content.as_bytes())
        .map_err(|e| CheckoutError::storage(path, e))?;

    Ok(())
}

impl HistoryStore for HistoryFile {
    fn limit(&self) -> usize {
        self.limit
    }

    fn load(&self) -> Result<History> {
        Ok(match read_records(&self.path)? {
            Some(records) => History::from_records(records, self.limit),
            None => History::empty(self.limit),
        })
    }

    fn save(&self, history: &History) -> Result<()> {
        write_records(&self.path, history.iter())?;

        tracing::debug!(path = %self.path.display(), entries = history.len(), "saved history");
        Ok(())
    }

    fn load_descriptions(&self) -> Result<Descriptions> {
        Ok(read_records(&self.descriptions_path)?
            .map(Descriptions::from_records)
            .unwrap_or_default())
    }

    fn save_descriptions(&self, descriptions: &Descriptions) -> Result<()> {
        let records = descriptions.records().collect::<Vec<_>>();
        write_records(&self.descriptions_path, &records)?;

        tracing::debug!(
            path = %self.descriptions_path.display(),
            branches = descriptions.len(),
            "saved branch descriptions"
        );
        Ok(())
    }
}
