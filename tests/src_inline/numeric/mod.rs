use super::*;

#[test]
fn test_normalize_min_max() {
    let out = normalize(&[2.0, 4.0, 3.0, 6.0]);
    assert_eq!(out, vec![0.0, 0.5, 0.25, 1.0]);
}

#[test]
fn test_normalize_constant_is_zero() {
    let out = normalize(&[7.5; 4]);
    assert_eq!(out, vec![0.0; 4]);
    assert!(is_constant(&[7.5; 4]));
    assert!(!is_constant(&[7.5, 7.6]));
}

#[test]
fn test_normalize_extreme_span() {
    let out = normalize(&[-f64::MAX, 0.0, f64::MAX]);
    assert_eq!(out[0], 0.0);
    assert!((out[1] - 0.5).abs() < 1e-12);
    assert_eq!(out[2], 1.0);
}

#[test]
fn test_cut_is_strict() {
    assert_eq!(cut(&[0.1, 0.5, 0.9, 0.5], 0.5), vec![0, 0, 1, 0]);
}

#[test]
fn test_linspace_endpoints() {
    let g = linspace(0.0, 1.0, 5);
    assert_eq!(g, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

#[test]
fn test_median_even_and_odd() {
    assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
}

#[test]
fn test_std_sample_ddof1() {
    let s = std_sample(&[1.0, 2.0, 3.0, 4.0]);
    assert!((s - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert_eq!(std_sample(&[1.0]), 0.0);
}

#[test]
fn test_trapezoid_linear() {
    let x = linspace(0.0, 1.0, 11);
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
    assert!((trapezoid(&x, &y) - 1.0).abs() < 1e-12);
}

#[test]
fn test_gradient_edges_and_interior() {
    let d = gradient(&[0.0, 1.0, 4.0, 9.0], 1.0);
    assert_eq!(d, vec![1.0, 2.0, 4.0, 5.0]);
    assert_eq!(gradient(&[3.0], 1.0), vec![0.0]);
}

#[test]
fn test_arg_extrema_take_first() {
    assert_eq!(argmax(&[1.0, 3.0, 3.0, f64::NAN]), Some(1));
    assert_eq!(argmin(&[2.0, 0.5, 0.5]), Some(1));
    assert_eq!(argmax(&[]), None);
}
