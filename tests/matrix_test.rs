//! Unit-level checks for the dense matrix module: known-value results for
//! every operation and shape-mismatch rejection for the checked combinators.

use dendrite_nn::{Matrix, NetworkError};

#[test]
fn zeros_has_requested_shape_and_fill() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.rows, 2);
    assert_eq!(m.cols, 3);
    assert_eq!(m.data, vec![vec![0.0; 3]; 2]);
}

#[test]
fn random_fill_stays_within_unit_range() {
    let m = Matrix::random(5, 4);
    for row in &m.data {
        for &value in row {
            assert!((-1.0..=1.0).contains(&value), "out of range: {value}");
        }
    }
}

#[test]
fn from_row_builds_a_single_row() {
    let m = Matrix::from_row(&[1.0, 2.0, 3.0]);
    assert_eq!(m.rows, 1);
    assert_eq!(m.cols, 3);
    assert_eq!(m.data, vec![vec![1.0, 2.0, 3.0]]);
}

#[test]
fn dot_product_known_values() {
    let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
    let c = a.dot(&b).unwrap();
    assert_eq!(c.data, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
}

#[test]
fn dot_rejects_mismatched_inner_dimension() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 2);
    assert!(matches!(a.dot(&b), Err(NetworkError::ShapeMismatch { .. })));
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let t = m.transpose();
    assert_eq!(t.rows, 3);
    assert_eq!(t.cols, 2);
    assert_eq!(t.data, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
}

#[test]
fn elementwise_combinators_known_values() {
    let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_data(vec![vec![0.5, 1.0], vec![2.0, -1.0]]);

    assert_eq!(a.sum(&b).unwrap().data, vec![vec![1.5, 3.0], vec![5.0, 3.0]]);
    assert_eq!(
        a.difference(&b).unwrap().data,
        vec![vec![0.5, 1.0], vec![1.0, 5.0]]
    );
    assert_eq!(
        a.hadamard(&b).unwrap().data,
        vec![vec![0.5, 2.0], vec![6.0, -4.0]]
    );
}

#[test]
fn elementwise_combinators_reject_shape_mismatch() {
    let a = Matrix::zeros(2, 2);
    let b = Matrix::zeros(3, 2);
    assert!(matches!(a.sum(&b), Err(NetworkError::ShapeMismatch { .. })));
    assert!(matches!(a.difference(&b), Err(NetworkError::ShapeMismatch { .. })));
    assert!(matches!(a.hadamard(&b), Err(NetworkError::ShapeMismatch { .. })));
}

#[test]
fn map_applies_function_to_every_entry() {
    let m = Matrix::from_data(vec![vec![1.0, -2.0], vec![3.0, -4.0]]);
    let doubled = m.map(|x| x * 2.0);
    assert_eq!(doubled.data, vec![vec![2.0, -4.0], vec![6.0, -8.0]]);
}

#[test]
fn scale_multiplies_every_entry() {
    let m = Matrix::from_data(vec![vec![1.0, 2.0]]);
    assert_eq!(m.scale(-0.5).data, vec![vec![-0.5, -1.0]]);
}

#[test]
fn add_bias_reads_leading_rows_only() {
    let product = Matrix::from_data(vec![vec![1.0, 1.0]]);
    let bias = Matrix::from_data(vec![vec![0.5, 0.25], vec![9.0, 9.0]]);
    let out = product.add_bias(&bias).unwrap();
    assert_eq!(out.data, vec![vec![1.5, 1.25]]);
}

#[test]
fn add_bias_matches_sum_for_equal_shapes() {
    let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_data(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
    assert_eq!(a.add_bias(&b).unwrap().data, a.sum(&b).unwrap().data);
}

#[test]
fn add_bias_rejects_incompatible_shapes() {
    let product = Matrix::zeros(2, 2);
    let narrow = Matrix::zeros(2, 3);
    let short = Matrix::zeros(1, 2);
    assert!(matches!(
        product.add_bias(&narrow),
        Err(NetworkError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        product.add_bias(&short),
        Err(NetworkError::ShapeMismatch { .. })
    ));
}
