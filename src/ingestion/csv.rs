//! CSV loading implementation.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::types::Table;

/// Load a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - A missing path fails with [`PipelineError::FileNotFound`] before any open is attempted.
/// - Open failures are reported as [`PipelineError::FileOpen`].
/// - The first record is *not* treated as a header; every record becomes a row.
/// - Records must all have the same number of fields.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> PipelineResult<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PipelineError::FileNotFound);
    }

    let file = File::open(path).map_err(PipelineError::FileOpen)?;
    debug!("opened csv file path={}", path.display());

    // The reader owns the file handle; it is closed when the reader drops.
    load_csv_from_reader(file)
}

/// Load CSV data from any reader, using the same rules as [`load_csv_from_path`].
pub fn load_csv_from_reader<R: std::io::Read>(reader: R) -> PipelineResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(PipelineError::CsvParse)?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    debug!("parsed csv rows={}", rows.len());
    Ok(Table::new(rows))
}
