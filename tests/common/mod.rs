#![allow(dead_code)]

pub mod command;

/// Cells of every data row in a `gco -l` table
pub fn history_rows(stdout: &str) -> Vec<Vec<String>> {
    stdout
        .lines()
        .filter(|line| line.starts_with('|'))
        .skip(1)
        .map(|line| {
            line.trim_matches('|')
                .split(" | ")
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

/// `(name, description)` pairs of a `gco -l` table, most recent first
pub fn history_entries(stdout: &str) -> Vec<(String, String)> {
    history_rows(stdout)
        .into_iter()
        .map(|row| (row[1].clone(), row[2].clone()))
        .collect()
}

pub fn entries(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(name, description)| (name.to_string(), description.to_string()))
        .collect()
}
