//! Reduction of a [`crate::types::NumericSeries`] to its arithmetic mean.

use crate::error::{PipelineError, PipelineResult};

/// Returns the arithmetic mean of `values`.
///
/// - Returns [`PipelineError::DivisionByZero`] for an empty slice.
/// - NaN and infinities propagate per IEEE-754; they are not filtered.
pub fn average(values: &[f64]) -> PipelineResult<f64> {
    if values.is_empty() {
        return Err(PipelineError::DivisionByZero);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}
