//! String to `f64` conversion.

use crate::error::{PipelineError, PipelineResult};
use crate::types::NumericSeries;

/// Parses every cell as an `f64`, preserving order.
///
/// Cells are parsed verbatim (no trimming). The first unparseable cell fails the whole
/// conversion with [`PipelineError::Conversion`]; no partial series is returned.
///
/// Literals too large for `f64` (e.g. `1e400`) are rejected rather than rounded to infinity.
/// Explicit `inf`, `infinity` and `nan` spellings are accepted.
pub fn convert_to_float<S: AsRef<str>>(data: &[S]) -> PipelineResult<NumericSeries> {
    data.iter().map(|cell| parse_cell(cell.as_ref())).collect()
}

fn parse_cell(raw: &str) -> PipelineResult<f64> {
    let v = raw.parse::<f64>().map_err(|_| PipelineError::Conversion)?;
    if v.is_finite() || is_non_finite_literal(raw) {
        Ok(v)
    } else {
        Err(PipelineError::Conversion)
    }
}

fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    matches!(
        unsigned.to_ascii_lowercase().as_str(),
        "inf" | "infinity" | "nan"
    )
}
