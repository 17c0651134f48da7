//! Pipeline driver: load → extract column → remove header → convert → average.
//!
//! Most callers should use [`run_pipeline`] with a [`PipelineConfig`], then render the outcome
//! with [`PipelineReport`].
//!
//! - Stages run in a fixed order, each consuming the previous stage's success value.
//! - The first failing stage ends the run; its error is returned unchanged and no later stage
//!   starts.
//! - If a [`PipelineObserver`] is configured in [`PipelineOptions`], stage starts, success,
//!   failures and alerts are reported to it.
//!
//! # Example
//!
//! ```no_run
//! use csv_average::pipeline::{run_pipeline, PipelineConfig, PipelineReport};
//!
//! let result = run_pipeline(&PipelineConfig::default());
//! println!("{}", PipelineReport::new(&result));
//! ```

mod observer;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::ingestion::load_csv_from_path;
use crate::processing::{average, convert_to_float, extract_column, remove_row};

pub use observer::{LogObserver, PipelineContext, PipelineObserver, PipelineSeverity, PipelineStats};

/// Input file used when no other path is configured.
pub const DEFAULT_CSV_PATH: &str = "example.csv";
/// Zero-based index of the score column.
pub const DEFAULT_COLUMN_INDEX: usize = 1;
/// Index of the first data row once the header is dropped.
pub const DEFAULT_HEADER_ROW_INDEX: usize = 1;

/// The pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Read the CSV file into a table.
    Load,
    /// Pull one column out of the table.
    ExtractColumn,
    /// Drop the header cell from the column.
    RemoveHeader,
    /// Parse cells into numbers.
    ConvertToFloat,
    /// Reduce the numbers to their mean.
    Average,
}

impl Stage {
    /// All stages in the order the driver runs them.
    pub const ALL: [Stage; 5] = [
        Stage::Load,
        Stage::ExtractColumn,
        Stage::RemoveHeader,
        Stage::ConvertToFloat,
        Stage::Average,
    ];

    /// Short, stable name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::ExtractColumn => "extract_column",
            Stage::RemoveHeader => "remove_header",
            Stage::ConvertToFloat => "convert_to_float",
            Stage::Average => "average",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Path of the CSV file.
    pub path: PathBuf,
    /// Zero-based column to average.
    pub column_index: usize,
    /// Index of the first retained row of the extracted column.
    pub header_row_index: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CSV_PATH),
            column_index: DEFAULT_COLUMN_INDEX,
            header_row_index: DEFAULT_HEADER_ROW_INDEX,
        }
    }
}

/// Options controlling how a run is observed.
///
/// Use [`Default`] for an unobserved run.
#[derive(Clone)]
pub struct PipelineOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PipelineSeverity,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: PipelineSeverity::Critical,
        }
    }
}

/// Run the full pipeline without an observer.
pub fn run_pipeline(config: &PipelineConfig) -> PipelineResult<f64> {
    run_pipeline_with_options(config, &PipelineOptions::default())
}

/// Run the full pipeline, reporting progress to `options.observer` if set.
///
/// When an observer is configured, this function reports:
///
/// - `on_stage_started` before each stage that actually runs
/// - `on_success` with row/value counts and the average
/// - `on_failure` with the failing stage and a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn run_pipeline_with_options(config: &PipelineConfig, options: &PipelineOptions) -> PipelineResult<f64> {
    let run = Run {
        ctx: PipelineContext {
            path: config.path.clone(),
            column_index: config.column_index,
        },
        observer: options.observer.as_deref(),
    };

    match execute(&run, config) {
        Ok(stats) => {
            if let Some(obs) = run.observer {
                obs.on_success(&run.ctx, stats);
            }
            Ok(stats.average)
        }
        Err(StageFailure { stage, error }) => {
            if let Some(obs) = run.observer {
                let sev = severity_for_error(&error);
                obs.on_failure(&run.ctx, stage, sev, &error);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&run.ctx, stage, sev, &error);
                }
            }
            Err(error)
        }
    }
}

/// Classify an error for observer callbacks.
///
/// Failures to reach the input file are [`PipelineSeverity::Critical`]; problems with its
/// content are [`PipelineSeverity::Error`].
pub fn severity_for_error(e: &PipelineError) -> PipelineSeverity {
    match e {
        PipelineError::FileNotFound | PipelineError::FileOpen(_) => PipelineSeverity::Critical,
        PipelineError::CsvParse(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => PipelineSeverity::Critical,
            _ => PipelineSeverity::Error,
        },
        PipelineError::ColumnExtract
        | PipelineError::HeaderRemove
        | PipelineError::Conversion
        | PipelineError::DivisionByZero => PipelineSeverity::Error,
    }
}

struct Run<'a> {
    ctx: PipelineContext,
    observer: Option<&'a dyn PipelineObserver>,
}

struct StageFailure {
    stage: Stage,
    error: PipelineError,
}

impl Run<'_> {
    fn stage<T>(&self, stage: Stage, f: impl FnOnce() -> PipelineResult<T>) -> Result<T, StageFailure> {
        debug!("stage={stage} starting");
        if let Some(obs) = self.observer {
            obs.on_stage_started(&self.ctx, stage);
        }
        f().map_err(|error| StageFailure { stage, error })
    }
}

fn execute(run: &Run<'_>, config: &PipelineConfig) -> Result<PipelineStats, StageFailure> {
    let table = run.stage(Stage::Load, || load_csv_from_path(&config.path))?;
    let column = run.stage(Stage::ExtractColumn, || extract_column(config.column_index, &table))?;
    let data = run.stage(Stage::RemoveHeader, || remove_row(config.header_row_index, &column))?;
    let values = run.stage(Stage::ConvertToFloat, || convert_to_float(&data))?;
    let avg = run.stage(Stage::Average, || average(&values))?;

    Ok(PipelineStats {
        rows: table.row_count(),
        values: values.len(),
        average: avg,
    })
}

/// The single line printed for a pipeline outcome.
///
/// - success: `An average score is <value>`
/// - failure: `Error processing data: <message>`
#[derive(Debug, Clone, Copy)]
pub struct PipelineReport<'a> {
    result: &'a PipelineResult<f64>,
}

impl<'a> PipelineReport<'a> {
    /// Wrap a pipeline result for display.
    pub fn new(result: &'a PipelineResult<f64>) -> Self {
        Self { result }
    }
}

impl fmt::Display for PipelineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(avg) => write!(f, "An average score is {avg}"),
            Err(e) => write!(f, "Error processing data: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{severity_for_error, PipelineConfig, PipelineReport, PipelineSeverity, Stage};
    use crate::error::PipelineError;

    #[test]
    fn default_config_matches_fixed_inputs() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.path.to_str(), Some("example.csv"));
        assert_eq!(cfg.column_index, 1);
        assert_eq!(cfg.header_row_index, 1);
    }

    #[test]
    fn report_formats_success() {
        let r: Result<f64, PipelineError> = Ok(20.0);
        assert_eq!(PipelineReport::new(&r).to_string(), "An average score is 20");
        let r: Result<f64, PipelineError> = Ok(20.5);
        assert_eq!(PipelineReport::new(&r).to_string(), "An average score is 20.5");
    }

    #[test]
    fn report_formats_failure() {
        let r: Result<f64, PipelineError> = Err(PipelineError::FileNotFound);
        assert_eq!(
            PipelineReport::new(&r).to_string(),
            "Error processing data: File not found"
        );
    }

    #[test]
    fn severity_splits_file_access_from_content_errors() {
        assert_eq!(severity_for_error(&PipelineError::FileNotFound), PipelineSeverity::Critical);
        assert_eq!(
            severity_for_error(&PipelineError::FileOpen(std::io::Error::other("denied"))),
            PipelineSeverity::Critical
        );
        assert_eq!(severity_for_error(&PipelineError::Conversion), PipelineSeverity::Error);
        assert_eq!(severity_for_error(&PipelineError::ColumnExtract), PipelineSeverity::Error);
        assert_eq!(severity_for_error(&PipelineError::DivisionByZero), PipelineSeverity::Error);
    }

    #[test]
    fn stages_are_ordered_and_named() {
        let names: Vec<String> = Stage::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec!["load", "extract_column", "remove_header", "convert_to_float", "average"]
        );
    }
}
