//! Decodes raw records into a `History` of per-key counts.
//!
//! Supported format:
//! - UTF-8, comma-separated, one record per line
//! - The first column is ignored; the second column is an integer key
//! - Optional header row (auto-detected: the first non-empty row is a header
//!   if its key column is not an integer)
//! - Double-quoted fields with embedded commas are handled correctly
//! - Blank lines and rows with fewer than two columns are skipped
//!
//! Each surviving row counts as one occurrence of its key.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::error::ForecastError;
use crate::forecast::observation::{History, Observation};

/// Column holding the key.
const KEY_COLUMN: usize = 1;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads `path` and counts occurrences per key.
pub fn load_history(path: impl AsRef<Path>) -> Result<History, ForecastError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let history = parse_history(&text)?;
    debug!(
        "loaded {} distinct keys from {}",
        history.len(),
        path.as_ref().display()
    );
    Ok(history)
}

/// Counts occurrences per key in CSV text; keys come out in ascending order.
pub fn parse_history(text: &str) -> Result<History, ForecastError> {
    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    let mut rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    if let Some((_, first)) = rows.peek() {
        if is_header(first) {
            rows.next();
        }
    }

    for (line_idx, line) in rows {
        let cells = parse_csv_row(line.trim());
        let Some(cell) = cells.get(KEY_COLUMN) else {
            continue;
        };
        let key = parse_key(cell).ok_or_else(|| {
            ForecastError::InvalidInput(format!(
                "row {}: key '{}' is not an integer",
                line_idx + 1,
                cell.trim()
            ))
        })?;
        *counts.entry(key).or_insert(0) += 1;
    }

    History::new(
        counts
            .into_iter()
            .map(|(key, count)| Observation::new(key, count))
            .collect(),
    )
}

/// Parses a user-supplied key, e.g. a year typed at the prompt.
pub fn parse_key(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row's key column is present but not an integer.
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line.trim());
    cells
        .get(KEY_COLUMN)
        .is_some_and(|c| parse_key(c).is_none())
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_key_sorted() {
        let text = "name,year\nAda,2021\nBob,2019\nCy,2021\n\nDee, 2020 \nEve,2021\n";
        let h = parse_history(text).unwrap();
        let pairs: Vec<(i64, u64)> = h.observations().iter().map(|o| (o.key, o.count)).collect();
        assert_eq!(pairs, vec![(2019, 1), (2020, 1), (2021, 3)]);
    }

    #[test]
    fn headerless_input_keeps_first_row() {
        let h = parse_history("a,2020\nb,2020\nc,2021").unwrap();
        assert_eq!(h.count_for(2020), Some(2));
        assert_eq!(h.count_for(2021), Some(1));
    }

    #[test]
    fn quoted_first_column_with_comma() {
        let h = parse_history("name,year\n\"Lovelace, Ada\",2020\n\"O\"\"Neil\",2020\n").unwrap();
        assert_eq!(h.count_for(2020), Some(2));
    }

    #[test]
    fn short_rows_are_skipped() {
        let h = parse_history("name,year\nlonely\nAda,2022\n").unwrap();
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn bad_key_is_invalid_input() {
        let err = parse_history("name,year\nAda,2020\nBob,twenty\n").unwrap_err();
        match err {
            ForecastError::InvalidInput(msg) => assert!(msg.contains("row 3"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_empty_history() {
        assert!(parse_history("").unwrap().is_empty());
        assert!(parse_history("name,year\n").unwrap().is_empty());
    }

    #[test]
    fn row_parser_handles_quotes() {
        assert_eq!(parse_csv_row("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
        assert_eq!(parse_csv_row("x"), vec!["x"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_history("/definitely/not/here.csv"),
            Err(ForecastError::Io(_))
        ));
    }
}
