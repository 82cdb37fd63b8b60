//! Monte Carlo Shapiro test thresholder.
//!
//! Seeded uniform samples are appended one at a time to the normalized
//! scores. Each sample that raises the best Shapiro-Wilk p-value so far is
//! kept as a candidate. The smallest candidate is the cutoff. The search is
//! greedy and depends on draw order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::numeric::shapiro::ShapiroWilkTest;
use crate::numeric::{cut, normalize};
use crate::thresholds::{
    ALL_INLIER_THRESHOLD, DEFAULT_SEED, ThreshError, Thresholder, prepare_scores,
};

#[derive(Debug, Clone)]
pub struct Mcst {
    seed: u64,
    thresh: Option<f64>,
}

impl Default for Mcst {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Mcst {
    pub fn new(seed: u64) -> Self {
        Self { seed, thresh: None }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Thresholder for Mcst {
    fn name(&self) -> &'static str {
        "mcst"
    }

    fn eval(&mut self, scores: &[f64]) -> Result<Vec<u8>, ThreshError> {
        let Some(normalized) = prepare_scores(scores)? else {
            self.thresh = Some(ALL_INLIER_THRESHOLD);
            return Ok(vec![0; scores.len()]);
        };

        let n = normalized.len();
        if n < 3 {
            tracing::debug!(n, "too few scores for a normality test");
            self.thresh = Some(ALL_INLIER_THRESHOLD);
            return Ok(cut(&normalized, ALL_INLIER_THRESHOLD));
        }

        let mut sorted = normalized.clone();
        sorted.sort_by(f64::total_cmp);
        let baseline = ShapiroWilkTest::new(n)?.test_sorted(&sorted)?;
        let extended = ShapiroWilkTest::new(n + 1)?;

        let draws = uniform_draws(self.seed, n);

        let mut best = baseline.p_value;
        let mut candidates = Vec::new();
        let mut buf = Vec::with_capacity(n + 1);
        for &sample in &draws {
            buf.clear();
            let at = sorted.partition_point(|&x| x < sample);
            buf.extend_from_slice(&sorted[..at]);
            buf.push(sample);
            buf.extend_from_slice(&sorted[at..]);

            let p = extended.test_sorted(&buf)?.p_value;
            if p > best {
                best = p;
                candidates.push(sample);
            }
        }

        let limit = candidates
            .iter()
            .copied()
            .reduce(f64::min)
            .unwrap_or(ALL_INLIER_THRESHOLD);
        tracing::debug!(
            seed = self.seed,
            baseline_p = baseline.p_value,
            best_p = best,
            candidates = candidates.len(),
            limit,
            "mcst threshold"
        );

        self.thresh = Some(limit);
        Ok(cut(&normalized, limit))
    }

    fn thresh(&self) -> Option<f64> {
        self.thresh
    }
}

/// `n` uniform(0,1) draws from a ChaCha20 stream, min-max normalized.
pub fn uniform_draws(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let raw: Vec<f64> = (0..n).map(|_| rng.random::<f64>()).collect();
    normalize(&raw)
}

#[cfg(test)]
#[path = "../../tests/src_inline/thresholds/mcst.rs"]
mod tests;
