//! Input loading.
//!
//! Only CSV is supported; see [`self::csv::load_csv_from_path`].

pub mod csv;

pub use self::csv::{load_csv_from_path, load_csv_from_reader};
