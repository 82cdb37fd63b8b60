use super::*;

#[test]
fn test_turning_points() {
    let d = [1.0, 0.5, -0.2, -0.1, 0.3, 0.0, 0.4, -1.0];
    assert_eq!(turning_points(&d, 2), vec![1, 4]);
    assert_eq!(turning_points(&d, 5), vec![1, 4, 6]);
    assert!(turning_points(&[-1.0, -2.0], 2).is_empty());
}

#[test]
fn test_bimodal_midpoint() {
    let mut scores = Vec::new();
    for i in 0..40 {
        scores.push(10.0 + (i % 10) as f64 * 0.1);
    }
    for i in 0..10 {
        scores.push(20.0 + i as f64 * 0.1);
    }
    let mut t = Fgd::new();
    let labels = t.eval(&scores).unwrap();
    let thresh = t.thresh().unwrap();
    assert!(thresh > 0.3 && thresh < 0.7, "thresh {thresh}");
    assert_eq!(labels.iter().filter(|&&l| l == 1).count(), 10);
}

#[test]
fn test_unimodal_falls_back_to_all_inliers() {
    let scores: Vec<f64> = (0..=20).map(|i| i as f64).collect();
    let mut t = Fgd::new();
    let labels = t.eval(&scores).unwrap();
    assert_eq!(t.thresh(), Some(ALL_INLIER_THRESHOLD));
    assert!(labels.iter().all(|&l| l == 0));
}
