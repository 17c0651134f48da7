//! Pipeline stages operating on loaded data.
//!
//! Each stage borrows its input and returns a new owned [`crate::PipelineResult`]:
//!
//! - [`extract_column()`]: one column out of a [`crate::types::Table`]
//! - [`remove_row()`]: drop leading rows from any sequence
//! - [`convert_to_float()`]: parse cells into a [`crate::types::NumericSeries`]
//! - [`average()`]: arithmetic mean
//!
//! ## Example: extract → remove header → convert → average
//!
//! ```rust
//! use csv_average::processing::{average, convert_to_float, extract_column, remove_row};
//! use csv_average::types::Table;
//!
//! let table = Table::from(vec![
//!     vec!["id", "score"],
//!     vec!["1", "10"],
//!     vec!["2", "20"],
//!     vec!["3", "30"],
//! ]);
//!
//! let column = extract_column(1, &table).unwrap();
//! let data = remove_row(1, &column).unwrap();
//! let values = convert_to_float(&data).unwrap();
//! assert_eq!(average(&values).unwrap(), 20.0);
//! ```

pub mod convert;
pub mod extract;
pub mod header;
pub mod reduce;

pub use convert::convert_to_float;
pub use extract::extract_column;
pub use header::remove_row;
pub use reduce::average;
