use super::*;

#[test]
fn test_pca_single_feature_is_centered_and_sign_fixed() {
    let m = Matrix::from_column(&[0.0, 0.1, 0.2, 1.0]);
    let scores = pca_first_component(&m);
    let mean = 1.3 / 4.0;
    let expected: Vec<f64> = [0.0, 0.1, 0.2, 1.0].iter().map(|v| v - mean).collect();
    for (a, b) in scores.iter().zip(&expected) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_pca_flips_when_largest_deviation_is_negative() {
    let m = Matrix::from_column(&[0.0, 0.9, 0.95, 1.0]);
    let scores = pca_first_component(&m);
    // the 0.0 entry deviates most, so it must come out positive
    assert!(scores[0] > 0.0);
    assert!(scores[3] < 0.0);
}

#[test]
fn test_pca_two_features_follows_dominant_axis() {
    let data = vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
    let m = Matrix::new(4, 2, data).unwrap();
    let scores = pca_first_component(&m);
    let step = 2f64.sqrt();
    for w in scores.windows(2) {
        assert!(((w[1] - w[0]).abs() - step).abs() < 1e-9);
    }
}

#[test]
fn test_nmf_rank_one_single_column_closed_form() {
    let x = [0.0, 0.25, 0.5, 1.0];
    let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
    let w = nmf_rank_one(&Matrix::from_column(&x), 200, 1e-4);
    for (wi, xi) in w.iter().zip(&x) {
        assert!((wi - xi / norm.sqrt()).abs() < 1e-9);
    }
}

#[test]
fn test_nmf_zero_matrix() {
    let w = nmf_rank_one(&Matrix::from_column(&[0.0, 0.0]), 10, 1e-4);
    assert_eq!(w, vec![0.0, 0.0]);
}

#[test]
fn test_matrix_shape_checked() {
    assert!(Matrix::new(2, 2, vec![1.0; 3]).is_none());
}

#[test]
fn test_method_parsing() {
    assert_eq!("PCA".parse::<DecompositionMethod>(), Ok(DecompositionMethod::Pca));
    assert_eq!("nmf".parse::<DecompositionMethod>(), Ok(DecompositionMethod::Nmf));
    assert!("svd".parse::<DecompositionMethod>().is_err());
}
