// Phonebook - core/search.rs
//
// Case-insensitive substring search over records.
// Core layer: pure logic, no I/O.
//
// A record matches when the term occurs in either the phone or the name.
// Which field matched is not reported.

use crate::core::model::Record;

/// Returns true if the lower-cased term occurs in either field of `record`.
///
/// `term_lower` must already be lower-cased.
pub fn matches(record: &Record, term_lower: &str) -> bool {
    record.phone().to_lowercase().contains(term_lower)
        || record.name().to_lowercase().contains(term_lower)
}

/// Find matching records, returning indices into `records`.
///
/// Scans in stored order and stops as soon as `limit` matches are collected,
/// so records after the last match are never examined. Surrounding
/// whitespace on `term` is ignored; an empty term matches nothing.
pub fn search_indices(records: &[Record], term: &str, limit: usize) -> Vec<usize> {
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &term_lower))
        .map(|(idx, _)| idx)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records(rows: &[(&str, &str)]) -> Vec<Record> {
        rows.iter()
            .map(|(phone, name)| Record::new(phone, name).unwrap())
            .collect()
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let records = make_records(&[("0501234567", "Dina Cohen"), ("0529999999", "Avi Levi")]);
        assert_eq!(search_indices(&records, "DINA", 10), vec![0]);
        assert_eq!(search_indices(&records, "levi", 10), vec![1]);
    }

    #[test]
    fn test_matches_phone_substring() {
        let records = make_records(&[("050-123-4567", "Dina"), ("+972 52 999", "Avi")]);
        assert_eq!(search_indices(&records, "123-45", 10), vec![0]);
        assert_eq!(search_indices(&records, "+972", 10), vec![1]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = make_records(&[("0501234567", "Dina Cohen")]);
        assert!(search_indices(&records, "999", 10).is_empty());
    }

    #[test]
    fn test_limit_caps_results_in_scan_order() {
        let rows: Vec<(String, String)> = (0..25)
            .map(|i| (format!("0500000{i:03}"), format!("Name {i}")))
            .collect();
        let records: Vec<Record> = rows
            .iter()
            .map(|(p, n)| Record::new(p, n).unwrap())
            .collect();

        let result = search_indices(&records, "name", 10);
        assert_eq!(result, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_or_blank_term_matches_nothing() {
        let records = make_records(&[("1", "a")]);
        assert!(search_indices(&records, "", 10).is_empty());
        assert!(search_indices(&records, "   ", 10).is_empty());
    }

    #[test]
    fn test_term_is_trimmed() {
        let records = make_records(&[("1", "Dina")]);
        assert_eq!(search_indices(&records, "  dina ", 10), vec![0]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let records = make_records(&[("1", "ÉLODIE")]);
        assert_eq!(search_indices(&records, "élodie", 10), vec![0]);
    }
}
