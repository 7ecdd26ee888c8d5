//! Row-stochastic normalization of weight matrices.
//!
//! Divides each row of a non-negative weight matrix by its row sum so the
//! matrix acts as a spatial averaging operator. Rows that sum to zero are
//! passed through untouched, so isolated nodes never produce NaN or Inf
//! entries.

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, trace};

/// Divide every row by its sum, producing a row-stochastic matrix.
///
/// Rows whose sum is zero are copied unchanged; for non-negative input that
/// keeps them all-zero instead of dividing by zero.
pub fn normalize_rows(w: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    let (nrows, ncols) = w.shape();
    trace!("Normalizing rows of {}×{} weight matrix", nrows, ncols);

    let mut flat: Vec<f64> = Vec::with_capacity(nrows * ncols);
    let mut zero_rows = 0usize;

    for i in 0..nrows {
        let row_sum: f64 = w.get_row(i).iterator(0).copied().sum();
        if row_sum > 0.0 {
            flat.extend(w.get_row(i).iterator(0).map(|&v| v / row_sum));
        } else {
            zero_rows += 1;
            flat.extend(w.get_row(i).iterator(0).copied());
        }
    }

    if zero_rows > 0 {
        debug!(
            "{} of {} rows had zero sum and were left untouched",
            zero_rows, nrows
        );
    }

    DenseMatrix::from_iterator(flat.into_iter(), nrows, ncols, 1)
}
