use approx::relative_eq;
use log::debug;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::knn::knn_graph;
use crate::matrix::{degrees, row_sums};
use crate::randomize::randomized_graph;
use crate::tests::init;
use crate::tests::test_data::make_random_coords;

// ============================================================================
// Degree preservation
// ============================================================================

#[test]
fn two_node_rows_keep_single_entry() {
    init();
    let w = DenseMatrix::from_2d_vec(&vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();

    let wr = randomized_graph(&w, 42);

    // degree 1 per row: exactly one entry, normalized to 1.0
    assert_eq!(degrees(&wr), vec![1, 1]);
    assert_eq!(row_sums(&wr), vec![1.0, 1.0]);
    for i in 0..2 {
        let ones = (0..2).filter(|&j| *wr.get((i, j)) == 1.0).count();
        assert_eq!(ones, 1, "Row {} should hold a single unit weight", i);
    }
}

#[test]
fn degree_sequence_is_preserved() {
    init();
    let coords = DenseMatrix::from_2d_vec(&make_random_coords(12, 5)).unwrap();
    let w = knn_graph(&coords, 3).unwrap();

    let wr = randomized_graph(&w, 7);

    assert_eq!(wr.shape(), w.shape());
    assert_eq!(degrees(&wr), degrees(&w));
}

#[test]
fn zero_degree_rows_stay_empty() {
    init();
    let w = DenseMatrix::from_2d_vec(&vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();

    let wr = randomized_graph(&w, 0);

    assert_eq!(degrees(&wr), vec![0, 2, 0]);
    assert_eq!(row_sums(&wr), vec![0.0, 1.0, 0.0]);
}

#[test]
fn weights_are_zero_or_inverse_degree() {
    init();
    let coords = DenseMatrix::from_2d_vec(&make_random_coords(15, 9)).unwrap();
    let w = knn_graph(&coords, 4).unwrap();

    let wr = randomized_graph(&w, 21);

    let degs = degrees(&wr);
    let (n, _) = wr.shape();
    for i in 0..n {
        let expected = 1.0 / degs[i] as f64;
        for j in 0..n {
            let v = *wr.get((i, j));
            assert!(
                v == 0.0 || relative_eq!(v, expected, epsilon = 1e-12),
                "Entry ({}, {}) = {} is neither 0 nor 1/{}",
                i,
                j,
                v,
                degs[i]
            );
        }
    }
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn same_seed_reproduces_bit_identical_output() {
    init();
    let coords = DenseMatrix::from_2d_vec(&make_random_coords(20, 13)).unwrap();
    let w = knn_graph(&coords, 3).unwrap();

    let a = randomized_graph(&w, 99);
    let b = randomized_graph(&w, 99);

    let (n, _) = a.shape();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(
                *a.get((i, j)),
                *b.get((i, j)),
                "Entry ({}, {}) differs for identical seeds",
                i,
                j
            );
        }
    }
}

#[test]
fn different_seeds_produce_different_graphs() {
    init();
    // with 40 nodes and degree 3 the chance of two seeds colliding on
    // every row is negligible
    let coords = DenseMatrix::from_2d_vec(&make_random_coords(40, 17)).unwrap();
    let w = knn_graph(&coords, 3).unwrap();

    let a = randomized_graph(&w, 1);
    let b = randomized_graph(&w, 2);

    let (n, _) = a.shape();
    let mut differing = 0usize;
    for i in 0..n {
        for j in 0..n {
            if *a.get((i, j)) != *b.get((i, j)) {
                differing += 1;
            }
        }
    }
    debug!("{} entries differ between seeds 1 and 2", differing);
    assert!(differing > 0, "Seeds 1 and 2 produced identical graphs");
}

// ============================================================================
// Self-loop policy
// ============================================================================

#[test]
fn full_degree_rows_keep_a_positive_diagonal() {
    init();
    // every row has degree 3 in a 3-column matrix, so the resample must
    // pick all columns, the diagonal included
    let w = DenseMatrix::from_2d_vec(&vec![
        vec![1.0, 1.0, 1.0],
        vec![1.0, 1.0, 1.0],
        vec![1.0, 1.0, 1.0],
    ])
    .unwrap();

    let wr = randomized_graph(&w, 8);

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                relative_eq!(*wr.get((i, j)), 1.0 / 3.0, epsilon = 1e-12),
                "Entry ({}, {})",
                i,
                j
            );
        }
    }
    // resampled neighborhoods may include the node itself
    for i in 0..3 {
        assert!(*wr.get((i, i)) > 0.0, "Diagonal entry at row {}", i);
    }
}

#[test]
fn input_matrix_is_not_mutated() {
    init();
    let w = DenseMatrix::from_2d_vec(&vec![vec![0.0, 2.0], vec![3.0, 0.0]]).unwrap();

    let _ = randomized_graph(&w, 4);

    assert_eq!(*w.get((0, 1)), 2.0);
    assert_eq!(*w.get((1, 0)), 3.0);
}
