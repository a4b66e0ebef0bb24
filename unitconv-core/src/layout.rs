//! Fixed-width record layouts
//!
//! Catalog tables are plain text, one record per line, with every field
//! right-padded to its column width. A `RecordLayout` names the columns and
//! their byte offsets; `load_records` is the single line parser used by
//! every catalog.

use crate::CatalogError;
use tracing::debug;

/// One column of a fixed-width table: bytes `[start, start + width)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub start: usize,
    pub width: usize,
}

impl Column {
    pub const fn new(name: &'static str, start: usize, width: usize) -> Self {
        Self { name, start, width }
    }

    pub const fn end(&self) -> usize {
        self.start + self.width
    }
}

/// Ordered, contiguous set of columns describing one table format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    pub columns: &'static [Column],
}

impl RecordLayout {
    pub const fn new(columns: &'static [Column]) -> Self {
        Self { columns }
    }

    /// Total width of a fully padded record
    pub fn width(&self) -> usize {
        self.columns.last().map_or(0, |c| c.end())
    }

    /// Shortest line that still reaches into the final column
    pub fn min_width(&self) -> usize {
        self.columns.last().map_or(0, |c| c.start + 1)
    }

    /// Split one line into its trimmed fields.
    ///
    /// The final column may be cut short, since editors strip trailing
    /// blanks. Every field must be non-empty after trimming.
    pub fn split<'a>(&self, line_no: usize, line: &'a str) -> Result<Vec<&'a str>, CatalogError> {
        if line.len() < self.min_width() {
            let missing = self
                .columns
                .iter()
                .find(|c| c.start >= line.len())
                .map_or("?", |c| c.name);
            return Err(CatalogError::malformed(
                line_no,
                format!(
                    "record is {} bytes, needs at least {} (missing column '{}')",
                    line.len(),
                    self.min_width(),
                    missing
                ),
            ));
        }

        if let Some(rest) = line.get(self.width()..) {
            if !rest.trim().is_empty() {
                return Err(CatalogError::malformed(
                    line_no,
                    format!("unexpected text after column {}: '{}'", self.width(), rest.trim()),
                ));
            }
        }

        let mut fields = Vec::with_capacity(self.columns.len());
        for column in self.columns {
            let end = column.end().min(line.len());
            let raw = line.get(column.start..end).ok_or_else(|| {
                CatalogError::malformed(
                    line_no,
                    format!("column '{}' splits a multi-byte character", column.name),
                )
            })?;
            let field = raw.trim_end_matches([' ', '\t']);
            if field.trim_start().is_empty() {
                return Err(CatalogError::malformed(
                    line_no,
                    format!("column '{}' is empty", column.name),
                ));
            }
            fields.push(field);
        }
        Ok(fields)
    }
}

/// A catalog entry that can be built from one fixed-width line
pub trait Record: Sized {
    const LAYOUT: RecordLayout;

    /// Build the entry from the trimmed fields, in layout order
    fn from_fields(line: usize, fields: &[&str]) -> Result<Self, CatalogError>;
}

/// Parse a whole table, stopping at the first bad line.
///
/// Blank lines and `#` comments are skipped. Each record is returned with
/// its 1-based line number so callers can report invariant violations.
pub fn load_records<T: Record>(source: &str) -> Result<Vec<(usize, T)>, CatalogError> {
    let mut records = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let stripped = line.trim_start();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let fields = T::LAYOUT.split(line_no, line)?;
        records.push((line_no, T::from_fields(line_no, &fields)?));
    }

    debug!(records = records.len(), "parsed fixed-width table");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: RecordLayout = RecordLayout::new(&[Column::new("key", 0, 6), Column::new("value", 6, 8)]);

    #[derive(Debug, PartialEq)]
    struct Pair {
        key: String,
        value: String,
    }

    impl Record for Pair {
        const LAYOUT: RecordLayout = PAIR;

        fn from_fields(_line: usize, fields: &[&str]) -> Result<Self, CatalogError> {
            Ok(Pair {
                key: fields[0].to_string(),
                value: fields[1].to_string(),
            })
        }
    }

    #[test]
    fn test_split_trims_padding() {
        let fields = PAIR.split(1, "ab    cd      ").unwrap();
        assert_eq!(fields, vec!["ab", "cd"]);
    }

    #[test]
    fn test_split_accepts_short_final_column() {
        let fields = PAIR.split(1, "ab    c").unwrap();
        assert_eq!(fields, vec!["ab", "c"]);
    }

    #[test]
    fn test_split_trims_tabs() {
        let fields = PAIR.split(1, "ab\t\t  cd\t").unwrap();
        assert_eq!(fields, vec!["ab", "cd"]);
    }

    #[test]
    fn test_split_rejects_missing_column() {
        let err = PAIR.split(7, "ab    ").unwrap_err();
        match err {
            CatalogError::MalformedRecord { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("value"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_split_rejects_blank_field() {
        assert!(PAIR.split(1, "      cd").is_err());
    }

    #[test]
    fn test_split_rejects_overflowing_text() {
        assert!(PAIR.split(1, "ab    cd      extra").is_err());
    }

    #[test]
    fn test_split_rejects_broken_utf8_boundary() {
        // "é" is two bytes and straddles the boundary at byte 6
        assert!(PAIR.split(1, "abcdeé  cd").is_err());
    }

    #[test]
    fn test_load_records_skips_comments_and_blanks() {
        let source = "# key value\n\nab    cd\n   \nef    gh\n";
        let records: Vec<(usize, Pair)> = load_records(source).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 3);
        assert_eq!(records[1].0, 5);
        assert_eq!(records[1].1.key, "ef");
    }

    #[test]
    fn test_load_records_is_fail_fast() {
        let source = "ab    cd\nbroken\nef    gh\n";
        let result: Result<Vec<(usize, Pair)>, _> = load_records(source);
        assert_eq!(result.unwrap_err().code(), crate::codes::MALFORMED_RECORD);
    }
}
