// Phonebook - core/format.rs
//
// Fixed-width text rendering of a record list.
// Core layer: pure, deterministic, renders records in the order given.

use crate::core::model::Record;
use crate::util::constants;

/// Column widths used when rendering a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Minimum width the phone column is left-justified to.
    pub phone_width: usize,
    /// Length of the divider line.
    pub divider_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            phone_width: constants::DEFAULT_PHONE_WIDTH,
            divider_width: constants::DEFAULT_DIVIDER_WIDTH,
        }
    }
}

/// Render `records` under `title`.
///
/// Output is one title line, one header line, one divider line, then one
/// line per record, joined with `\n` and without a trailing newline.
pub fn render_table(title: &str, records: &[Record], layout: &TableLayout) -> String {
    let mut lines = Vec::with_capacity(records.len() + 3);
    lines.push(format!("{} {title}", constants::TITLE_ICON));
    lines.push(constants::TABLE_HEADER.to_string());
    lines.push(constants::DIVIDER_CHAR.to_string().repeat(layout.divider_width));

    for record in records {
        lines.push(format!(
            "{:<width$}\t{}",
            record.phone(),
            record.name(),
            width = layout.phone_width
        ));
    }

    lines.join("\n")
}
