use super::*;
use crate::numeric::trapezoid;

#[test]
fn test_scott_bandwidth() {
    let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
    let expected = crate::numeric::std_sample(&samples) * 5f64.powf(-0.2);
    assert!((scott_bandwidth(&samples) - expected).abs() < 1e-12);
}

#[test]
fn test_kde_grid_shape() {
    let est = gen_kde(&[0.0, 0.2, 0.4, 1.0], 0.0, 1.0, 8);
    assert_eq!(est.len(), 8);
    assert_eq!(est.values.len(), 8);
    assert_eq!(est.grid[0], 0.0);
    assert_eq!(est.grid[7], 1.0);
    assert!((est.spacing() - 1.0 / 7.0).abs() < 1e-12);
    assert!(est.values.iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[test]
fn test_kde_integrates_to_one_over_wide_domain() {
    let samples = [0.4, 0.5, 0.55, 0.6, 0.7];
    let est = gen_kde(&samples, -5.0, 6.0, 2000);
    let area = trapezoid(&est.grid, &est.values);
    assert!((area - 1.0).abs() < 1e-3, "area {area}");
}

#[test]
fn test_cdf_monotone_and_bounded() {
    let est = gen_cdf(&[0.1, 0.3, 0.35, 0.9], 0.0, 1.0, 50);
    for w in est.values.windows(2) {
        assert!(w[1] >= w[0]);
    }
    assert!(est.values[0] >= 0.0);
    assert!(est.values[49] <= 1.0);
}

#[test]
fn test_constant_samples_use_fallback_bandwidth() {
    let est = gen_kde(&[0.0, 0.0, 0.0], 0.0, 1.0, 10);
    assert!(est.values.iter().all(|v| v.is_finite()));
    assert!(est.values[0] > est.values[9]);
}
