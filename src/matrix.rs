//! Inspection and application helpers for dense weight matrices.
//!
//! Read-only views over a dense N×N weight matrix: degree sequence, row
//! sums, sparsity, summary statistics, row-stochastic validation, and the
//! matrix-vector product that applies the matrix as a spatial averaging
//! operator.

use std::fmt;

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use approx::relative_eq;
use log::{debug, info, trace, warn};

/// Count of strictly positive entries per row.
pub fn degrees(w: &DenseMatrix<f64>) -> Vec<usize> {
    let (nrows, _) = w.shape();
    trace!("Extracting degree sequence from {} rows", nrows);
    (0..nrows)
        .map(|i| w.get_row(i).iterator(0).filter(|&&v| v > 0.0).count())
        .collect()
}

/// Sum of each row.
pub fn row_sums(w: &DenseMatrix<f64>) -> Vec<f64> {
    let (nrows, _) = w.shape();
    (0..nrows)
        .map(|i| w.get_row(i).iterator(0).copied().sum())
        .collect()
}

/// Number of strictly positive entries in the whole matrix.
pub fn nnz(w: &DenseMatrix<f64>) -> usize {
    let count: usize = degrees(w).iter().sum();
    debug!("Matrix has {} non-zero entries", count);
    count
}

/// Fraction of zero entries: 1 - nnz / (rows * cols).
pub fn sparsity(w: &DenseMatrix<f64>) -> f64 {
    let (rows, cols) = w.shape();
    let total_elements = rows * cols;

    1.0 - (nnz(w) as f64) / (total_elements as f64)
}

/// Summary statistics of a weight matrix.
#[derive(Debug, Clone)]
pub struct WeightStats {
    pub shape: (usize, usize),
    pub nnz: usize,
    pub sparsity: f64,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

pub fn statistics(w: &DenseMatrix<f64>) -> WeightStats {
    trace!("Computing weight matrix statistics");
    let degs = degrees(w);
    let min_degree = degs.iter().copied().min().unwrap_or(0);
    let max_degree = degs.iter().copied().max().unwrap_or(0);
    let mean_degree = degs.iter().sum::<usize>() as f64 / degs.len() as f64;

    let nnz: usize = degs.iter().sum();
    let (rows, cols) = w.shape();
    let sparsity = 1.0 - (nnz as f64) / ((rows * cols) as f64);

    let stats = WeightStats {
        shape: w.shape(),
        nnz,
        sparsity,
        min_degree,
        max_degree,
        mean_degree,
    };

    debug!(
        "Computed statistics: shape {:?}, {} non-zeros, {:.2}% sparse, degree range [{}, {}]",
        stats.shape,
        stats.nnz,
        stats.sparsity * 100.0,
        stats.min_degree,
        stats.max_degree
    );

    stats
}

impl fmt::Display for WeightStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weight Matrix Statistics:")?;
        writeln!(f, "  Shape: {:?}", self.shape)?;
        writeln!(
            f,
            "  Non-zero entries: {} ({:.2}% dense)",
            self.nnz,
            (1.0 - self.sparsity) * 100.0
        )?;
        writeln!(f, "  Sparsity: {:.4}", self.sparsity)?;
        writeln!(
            f,
            "  Degree range: [{}, {}]",
            self.min_degree, self.max_degree
        )?;
        writeln!(f, "  Mean degree: {:.4}", self.mean_degree)?;
        Ok(())
    }
}

/// Structure to hold row-stochastic validation results
#[derive(Debug, Clone)]
pub struct RowStochasticValidation {
    pub is_valid: bool,
    pub max_row_sum_error: f64,
    pub row_sum_violations: Vec<(usize, f64)>,
    pub zero_rows: Vec<usize>,
}

impl RowStochasticValidation {
    fn new() -> Self {
        Self {
            is_valid: false,
            max_row_sum_error: 0.0,
            row_sum_violations: Vec::new(),
            zero_rows: Vec::new(),
        }
    }
}

/// Verify that every row either sums to 1 within tolerance or is all-zero.
///
/// Zero-sum rows are legal output of the normalizer (isolated nodes) and are
/// reported separately instead of counting as violations.
pub fn verify_row_stochastic(w: &DenseMatrix<f64>, tolerance: f64) -> RowStochasticValidation {
    info!(
        "Verifying row-stochastic property with tolerance {:.2e}",
        tolerance
    );
    let (nrows, _) = w.shape();
    let mut validation = RowStochasticValidation::new();

    for i in 0..nrows {
        let row_sum: f64 = w.get_row(i).iterator(0).copied().sum();
        if row_sum == 0.0 {
            validation.zero_rows.push(i);
            continue;
        }
        let error = (row_sum - 1.0).abs();
        validation.max_row_sum_error = validation.max_row_sum_error.max(error);
        if !relative_eq!(row_sum, 1.0, epsilon = tolerance) {
            validation.row_sum_violations.push((i, row_sum));
        }
    }

    validation.is_valid = validation.row_sum_violations.is_empty();

    debug!("Row-stochastic validation results:");
    debug!("  Valid: {}", validation.is_valid);
    debug!("  Max row sum error: {:.2e}", validation.max_row_sum_error);
    debug!(
        "  Row sum violations: {}",
        validation.row_sum_violations.len()
    );
    debug!("  Zero rows: {}", validation.zero_rows.len());

    if !validation.is_valid {
        warn!("Row-stochastic validation failed - rows do not sum to one");
    }

    validation
}

/// Compute matrix-vector multiplication: y = W * x.
///
/// For a row-stochastic matrix this is one spatial averaging step: each
/// output entry is the weighted mean of `x` over that node's neighbors.
pub fn apply(w: &DenseMatrix<f64>, x: &[f64]) -> Vec<f64> {
    let (nrows, ncols) = w.shape();
    assert_eq!(
        x.len(),
        ncols,
        "Vector length {} must match matrix width {}",
        x.len(),
        ncols
    );

    trace!(
        "Computing matrix-vector multiplication: {}×{} * {}",
        nrows,
        ncols,
        x.len()
    );

    let mut result = vec![0.0; nrows];
    for i in 0..nrows {
        result[i] = w
            .get_row(i)
            .iterator(0)
            .zip(x.iter())
            .map(|(&wij, &xj)| wij * xj)
            .sum();
    }
    result
}
