use thiserror::Error;

/// Convenience result type returned by every pipeline stage.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by pipeline stages.
///
/// The `Display` output of each variant is the message reported to the user after the
/// `Error processing data: ` label.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No file exists at the input path.
    #[error("File not found")]
    FileNotFound,

    /// The path exists but could not be opened (permissions, removed in between, ...).
    #[error("Unable to open file - {0}")]
    FileOpen(#[source] std::io::Error),

    /// Reading the CSV failed: records with differing field counts, invalid UTF-8, or an I/O
    /// error while reading (e.g. the path is a directory).
    #[error("Unable to read CSV file - {0}")]
    CsvParse(#[source] csv::Error),

    /// The requested column index is not present in every row.
    #[error("Unable to extract column")]
    ColumnExtract,

    /// The sequence is too short to drop a header row.
    #[error("Unable to remove header")]
    HeaderRemove,

    /// At least one cell is not a valid floating point number.
    #[error("Unable to convert to float")]
    Conversion,

    /// No values remain to average.
    #[error("Division by zero")]
    DivisionByZero,
}
