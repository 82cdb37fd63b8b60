use super::*;

fn skewed() -> Vec<f64> {
    let mut v: Vec<f64> = (0..30).map(|i| 1.0 + (i as f64 * 0.37).sin() * 0.2).collect();
    v.extend([4.0, 4.5, 6.0]);
    v
}

#[test]
fn test_same_seed_same_result() {
    let scores = skewed();
    let mut a = Mcst::new(7);
    let mut b = Mcst::new(7);
    assert_eq!(a.eval(&scores).unwrap(), b.eval(&scores).unwrap());
    assert_eq!(a.thresh().unwrap().to_bits(), b.thresh().unwrap().to_bits());
}

#[test]
fn test_threshold_is_a_draw_or_default() {
    let scores = skewed();
    let mut t = Mcst::default();
    assert_eq!(t.seed(), DEFAULT_SEED);
    t.eval(&scores).unwrap();
    let thresh = t.thresh().unwrap();
    let draws = uniform_draws(DEFAULT_SEED, scores.len());
    assert!(thresh == ALL_INLIER_THRESHOLD || draws.contains(&thresh));
}

#[test]
fn test_uniform_draws_reproducible_and_normalized() {
    let a = uniform_draws(99, 25);
    let b = uniform_draws(99, 25);
    assert_eq!(a, b);
    assert_ne!(a, uniform_draws(100, 25));
    let (min, max) = crate::numeric::min_max(&a);
    assert_eq!(min, 0.0);
    assert_eq!(max, 1.0);
}

#[test]
fn test_two_scores_cannot_be_tested() {
    let mut t = Mcst::default();
    let labels = t.eval(&[0.0, 5.0]).unwrap();
    assert_eq!(labels, vec![0, 0]);
    assert_eq!(t.thresh(), Some(ALL_INLIER_THRESHOLD));
}

fn box_muller_normal(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
            let u2: f64 = rng.random();
            (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
        })
        .collect()
}

#[test]
fn test_normal_sample_threshold_is_reproducible_draw() {
    // the greedy search does not guarantee an all-inlier result on normal data
    for data_seed in [1u64, 2, 3] {
        let scores = box_muller_normal(data_seed, 50);
        let draws = uniform_draws(DEFAULT_SEED, scores.len());

        let mut a = Mcst::new(DEFAULT_SEED);
        let mut b = Mcst::new(DEFAULT_SEED);
        let labels_a = a.eval(&scores).unwrap();
        let labels_b = b.eval(&scores).unwrap();
        let thresh = a.thresh().unwrap();

        assert_eq!(labels_a, labels_b);
        assert_eq!(thresh.to_bits(), b.thresh().unwrap().to_bits());
        assert!(thresh == ALL_INLIER_THRESHOLD || draws.contains(&thresh));
        assert_eq!(labels_a, cut(&normalize(&scores), thresh));
    }
}
