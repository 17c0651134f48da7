//! Header row removal.

use crate::error::{PipelineError, PipelineResult};

/// Returns `data[row_index..]` as a new vector.
///
/// Works on any sequence: in the pipeline it is applied to an extracted column, but a table's
/// rows work just as well.
///
/// Fails with [`PipelineError::HeaderRemove`] if `data` has at most one element, or if
/// `row_index` lies past the end of `data`.
pub fn remove_row<T: Clone>(row_index: usize, data: &[T]) -> PipelineResult<Vec<T>> {
    if data.len() <= 1 {
        return Err(PipelineError::HeaderRemove);
    }
    data.get(row_index..)
        .map(<[T]>::to_vec)
        .ok_or(PipelineError::HeaderRemove)
}

#[cfg(test)]
mod tests {
    use super::remove_row;
    use crate::error::PipelineError;

    #[test]
    fn drops_leading_header() {
        let col = vec!["score", "10", "20"];
        assert_eq!(remove_row(1, &col).unwrap(), vec!["10", "20"]);
        // Original unchanged
        assert_eq!(col.len(), 3);
    }

    #[test]
    fn single_element_fails() {
        let err = remove_row(1, &["score"]).unwrap_err();
        assert!(matches!(err, PipelineError::HeaderRemove));
        assert_eq!(err.to_string(), "Unable to remove header");
    }

    #[test]
    fn empty_fails() {
        let empty: [String; 0] = [];
        assert!(matches!(remove_row(0, &empty), Err(PipelineError::HeaderRemove)));
    }

    #[test]
    fn index_equal_to_len_yields_empty() {
        assert_eq!(remove_row(2, &[1, 2]).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn index_past_end_fails() {
        assert!(matches!(remove_row(5, &[1, 2]), Err(PipelineError::HeaderRemove)));
    }

    #[test]
    fn works_on_table_rows() {
        let rows = vec![vec!["id"], vec!["1"]];
        assert_eq!(remove_row(1, &rows).unwrap(), vec![vec!["1"]]);
    }
}
