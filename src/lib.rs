//! Spatial weight matrices for station networks.
//!
//! This crate builds row-stochastic spatial weight matrices over a set of
//! spatially distributed observation points (stations). Two builders are
//! provided:
//!
//! 1. [`knn_graph`] connects each station to its k nearest neighbors under
//!    Euclidean distance on an N×2 coordinate matrix.
//! 2. [`randomized_graph`] resamples an existing weight matrix into a
//!    degree-preserving null model, reproducible from an explicit seed.
//!
//! Both builders finish with [`normalize_rows`], which divides each row by
//! its sum while leaving zero-sum rows untouched, so the result can be used
//! directly as a spatial averaging operator (see [`matrix::apply`]).
//!
//! Matrices are dense `smartcore` `DenseMatrix<f64>` values throughout;
//! station networks are small enough that an N×N dense layout beats the
//! bookkeeping of a sparse one. All functions take their input by shared
//! reference and return a freshly allocated matrix, so calls are independent
//! and safe to issue in parallel.
//!
//! # Usage
//!
//! ```
//! use smartcore::linalg::basic::arrays::Array;
//! use smartcore::linalg::basic::matrix::DenseMatrix;
//! use weightspace::{knn_graph, randomized_graph};
//!
//! let coords = DenseMatrix::from_2d_vec(&vec![
//!     vec![0.0, 0.0],
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//! ])
//! .unwrap();
//!
//! // each station keeps its single nearest neighbor
//! let w = knn_graph(&coords, 1).unwrap();
//! assert_eq!(*w.get((0, 1)), 1.0);
//!
//! // degree-preserving null model of the same graph
//! let wr = randomized_graph(&w, 0);
//! assert_eq!(wr.shape(), (3, 3));
//! ```

pub mod error;
pub mod knn;
pub mod matrix;
pub mod normalize;
pub mod randomize;

pub use error::{GraphError, GraphResult};
pub use knn::knn_graph;
pub use normalize::normalize_rows;
pub use randomize::randomized_graph;

#[cfg(test)]
mod tests;
