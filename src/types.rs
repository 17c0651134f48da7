//! Core data model types flowing between pipeline stages.
//!
//! Every stage takes its input by reference and returns a freshly owned value, so nothing is
//! mutated after construction.

/// A single column of raw cells, one per retained row.
pub type Column = Vec<String>;

/// Parsed numeric values, same order and cardinality as the [`Column`] they came from.
pub type NumericSeries = Vec<f64>;

/// Raw CSV content: ordered rows of string cells.
///
/// The first row is kept as-is; header handling happens later in the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows in the table (header included).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

impl From<Vec<Vec<&str>>> for Table {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn table_from_str_rows_preserves_order() {
        let t = Table::from(vec![vec!["id", "score"], vec!["1", "10"]]);
        assert_eq!(t.row_count(), 2);
        assert!(!t.is_empty());
        assert_eq!(t.rows[1], vec!["1".to_string(), "10".to_string()]);
        assert_eq!(t.iter_rows().next(), Some(&["id".to_string(), "score".to_string()][..]));
    }

    #[test]
    fn default_table_is_empty() {
        let t = Table::default();
        assert!(t.is_empty());
        assert_eq!(t.row_count(), 0);
    }
}
