//! `csv-average` reads a CSV file, extracts one numeric column, drops the header row and
//! computes the arithmetic mean of what remains.
//!
//! The work is a fixed pipeline of small stages. Every stage returns a
//! [`PipelineResult`], so the first failure short-circuits the rest of the run and is reported
//! unchanged.
//!
//! The primary entrypoint is [`pipeline::run_pipeline`], configured through
//! [`pipeline::PipelineConfig`].
//!
//! ## Quick example: run the pipeline
//!
//! ```no_run
//! use csv_average::pipeline::{run_pipeline, PipelineConfig, PipelineReport};
//!
//! let config = PipelineConfig {
//!     path: "scores.csv".into(),
//!     ..Default::default()
//! };
//! let result = run_pipeline(&config);
//! println!("{}", PipelineReport::new(&result));
//! ```
//!
//! ## Stages
//!
//! | Stage | Function | Error |
//! |---|---|---|
//! | load | [`ingestion::load_csv_from_path`] | `FileNotFound`, `FileOpen`, `CsvParse` |
//! | extract column | [`processing::extract_column`] | `ColumnExtract` |
//! | remove header | [`processing::remove_row`] | `HeaderRemove` |
//! | convert | [`processing::convert_to_float`] | `Conversion` |
//! | average | [`processing::average`] | `DivisionByZero` |
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading into a [`types::Table`]
//! - [`processing`]: column extraction, header removal, conversion, averaging
//! - [`pipeline`]: stage composition, observers and the final report line
//! - [`types`]: table / column / series types
//! - [`error`]: the error type shared by all stages

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{PipelineError, PipelineResult};
