use crate::numeric::argmax;
use crate::numeric::histogram::Histogram;
use crate::thresholds::hist::{HistMethod, cumsum, cumsum_rev};

/// Yen: maximum correlation criterion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yen;

impl HistMethod for Yen {
    fn threshold(&self, hist: &Histogram, _scores: &[f64]) -> Option<f64> {
        let total = hist.total() as f64;
        let nbins = hist.nbins();
        if total <= 0.0 || nbins < 2 {
            return None;
        }

        let pmf: Vec<f64> = hist.counts.iter().map(|&c| c as f64 / total).collect();
        let squared: Vec<f64> = pmf.iter().map(|p| p * p).collect();
        let p1 = cumsum(&pmf);
        let p1_sq = cumsum(&squared);
        let p2_sq = cumsum_rev(&squared);

        let crit: Vec<f64> = (0..nbins - 1)
            .map(|i| {
                let spread = p1[i] * (1.0 - p1[i]);
                let value = (spread * spread / (p1_sq[i] * p2_sq[i + 1])).ln();
                if value.is_finite() {
                    value
                } else {
                    f64::NEG_INFINITY
                }
            })
            .collect();

        if crit.iter().all(|v| *v == f64::NEG_INFINITY) {
            return None;
        }
        argmax(&crit).map(|i| hist.centers[i])
    }
}
