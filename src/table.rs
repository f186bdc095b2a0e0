//! The `Table` output type (§3): columns, rows, and free-form attrs.

/// A single cell value: `Some(text)` or the explicit null sentinel.
pub type Cell = Option<String>;

/// A table row. Always has length equal to its table's column count.
pub type Row = Vec<Cell>;

/// A column's name and, for Non-Standard tables, the display-column
/// interval it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub interval: Option<(usize, usize)>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interval: None,
        }
    }

    pub fn with_interval(name: impl Into<String>, interval: (usize, usize)) -> Self {
        Self {
            name: name.into(),
            interval: Some(interval),
        }
    }
}

/// A parsed table: ordered columns, ordered rows, and free-form metadata.
///
/// `attrs` preserves insertion order (a `Vec` rather than a map) because the
/// Standard Parser's metadata sections are naturally ordered top-to-bottom
/// in the source file, and callers commonly want to display them in that
/// order.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Row>,
    pub attrs: Vec<(String, String)>,
}

impl Table {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            attrs: Vec::new(),
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Set (or overwrite) an attr, preserving the position of the first
    /// insertion if the key already exists.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.attrs.push((key, value));
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Push a row, asserting it has the table's column count — the
    /// constructors are responsible for padding/trimming before this call
    /// (invariant 2 in §8: every emitted row's length equals the column
    /// count).
    pub fn push_row(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_overwrites_in_place() {
        let mut t = Table::new(vec![ColumnSpec::new("a")]);
        t.set_attr("k1", "v1");
        t.set_attr("k2", "v2");
        t.set_attr("k1", "v1-updated");
        assert_eq!(t.attrs, vec![
            ("k1".to_string(), "v1-updated".to_string()),
            ("k2".to_string(), "v2".to_string()),
        ]);
    }

    #[test]
    fn test_get_attr() {
        let mut t = Table::new(vec![]);
        t.set_attr("title", "Table S1");
        assert_eq!(t.get_attr("title"), Some("Table S1"));
        assert_eq!(t.get_attr("missing"), None);
    }

    #[test]
    fn test_column_names() {
        let t = Table::new(vec![ColumnSpec::new("age"), ColumnSpec::new("d18O")]);
        assert_eq!(t.column_names(), vec!["age", "d18O"]);
    }
}
