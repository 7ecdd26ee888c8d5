//! k-nearest-neighbor adjacency from station coordinates.
//!
//! Builds a dense adjacency matrix in which each row marks the k coordinate
//! points closest to that row's point under Euclidean distance, then passes
//! the result through row normalization to obtain a row-stochastic weight
//! matrix.
//!
//! # Determinism
//!
//! Neighbor candidates are ranked with a stable sort, so ties between
//! equidistant points resolve by index order. The point itself is excluded
//! explicitly by index rather than by sort position, which keeps the
//! diagonal zero even when two stations share coordinates. The per-row
//! distance pass runs in parallel with rayon and rows are collected in index
//! order, so repeated calls on the same input produce identical output.
//!
//! # Complexity
//!
//! O(N² log N) time for the candidate sorts, O(N²) space for the dense
//! adjacency.

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use rayon::prelude::*;

use log::{debug, info};

use crate::error::{GraphError, GraphResult};
use crate::normalize::normalize_rows;

/// Euclidean distance between two coordinate rows.
pub fn euclidean_dist(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Build a row-stochastic k-nearest-neighbor weight matrix from an N×2
/// coordinate matrix.
///
/// Row i carries equal weight on the k points nearest to point i, self
/// excluded. When fewer than k other points exist the row truncates to the
/// N-1 available neighbors.
///
/// # Errors
///
/// Returns `GraphError::InvalidArgument` when `k` is zero.
pub fn knn_graph(coords: &DenseMatrix<f64>, k: usize) -> GraphResult<DenseMatrix<f64>> {
    if k == 0 {
        return Err(GraphError::InvalidArgument(
            "k must be positive".to_string(),
        ));
    }

    let (n, dim) = coords.shape();
    info!(
        "Building k-NN graph: {} nodes, k={}, {} coordinate dims",
        n, k, dim
    );
    if k >= n {
        debug!(
            "k={} >= {} nodes, rows truncate to {} neighbors",
            k,
            n,
            n.saturating_sub(1)
        );
    }

    let points: Vec<Vec<f64>> = (0..n)
        .map(|i| coords.get_row(i).iterator(0).copied().collect())
        .collect();

    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut order: Vec<(usize, f64)> = (0..n)
                .map(|j| (j, euclidean_dist(&points[i], &points[j])))
                .collect();
            // stable sort keeps index order on distance ties
            order.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            let mut row = vec![0.0; n];
            for &(j, _) in order.iter().filter(|&&(j, _)| j != i).take(k) {
                row[j] = 1.0;
            }
            row
        })
        .collect();

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let adjacency = DenseMatrix::from_iterator(flat.into_iter(), n, n, 1);

    debug!("Adjacency assembled, normalizing {} rows", n);
    Ok(normalize_rows(&adjacency))
}
