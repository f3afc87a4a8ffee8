//! Bordered table used by the history listing
//!
//! ```text
//! + --- + ------------------------------ + ---------------------------------------- +
//! |  n  | name                           | description                              |
//! + --- + ------------------------------ + ---------------------------------------- +
//! |  0  | feature/login                  | login form validation                    |
//! + --- + ------------------------------ + ---------------------------------------- +
//! ```

use crate::artifacts::history::checkout_record::CheckoutRecord;
use colored::Colorize;
use std::io::Write;

pub const ORDINAL_WIDTH: usize = 3;
pub const NAME_WIDTH: usize = 30;
pub const DESCRIPTION_WIDTH: usize = 40;

pub fn write_history_table<W: Write + ?Sized>(
    writer: &mut W,
    records: &[CheckoutRecord],
) -> std::io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let border = border_line();

    writeln!(writer, "{border}")?;
    writeln!(
        writer,
        "| {:^ORDINAL_WIDTH$} | {:<NAME_WIDTH$} | {:<DESCRIPTION_WIDTH$} |",
        "n", "name", "description"
    )?;
    writeln!(writer, "{border}")?;

    for (ordinal, record) in records.iter().enumerate() {
        let ordinal = format!("{:^ORDINAL_WIDTH$}", ordinal);
        let name = format!("{:<NAME_WIDTH$}", truncate(record.name(), NAME_WIDTH));
        let description = format!(
            "{:<DESCRIPTION_WIDTH$}",
            truncate(record.description(), DESCRIPTION_WIDTH)
        );

        writeln!(
            writer,
            "| {} | {} | {} |",
            ordinal.dimmed(),
            name.cyan(),
            description
        )?;
    }

    writeln!(writer, "{border}")
}

fn border_line() -> String {
    format!(
        "+ {} + {} + {} +",
        "-".repeat(ORDINAL_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(DESCRIPTION_WIDTH)
    )
}

/// Cut `value` to `width` characters, flattening control characters so a
/// cell always stays on its row
fn truncate(value: &str, width: usize) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(width)
        .collect()
}
