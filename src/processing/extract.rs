//! Column extraction for [`crate::types::Table`].

use crate::error::{PipelineError, PipelineResult};
use crate::types::{Column, Table};

/// Returns the cells at `column_index` from every row of `table`, in row order.
///
/// Fails with [`PipelineError::ColumnExtract`] if the table is empty or any row is too narrow to
/// contain `column_index`.
pub fn extract_column(column_index: usize, table: &Table) -> PipelineResult<Column> {
    if table.is_empty() {
        return Err(PipelineError::ColumnExtract);
    }

    table
        .iter_rows()
        .map(|row| row.get(column_index).cloned().ok_or(PipelineError::ColumnExtract))
        .collect()
}
