use crate::numeric::argmax;
use crate::numeric::histogram::Histogram;
use crate::thresholds::hist::{HistMethod, cumsum, cumsum_rev};

/// Otsu: maximize the between-class variance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Otsu;

impl HistMethod for Otsu {
    fn threshold(&self, hist: &Histogram, _scores: &[f64]) -> Option<f64> {
        let counts = hist.counts_f64();
        let centers = &hist.centers;
        let nbins = counts.len();
        if nbins < 2 {
            return None;
        }

        let weighted: Vec<f64> = counts.iter().zip(centers).map(|(k, c)| k * c).collect();
        let weight1 = cumsum(&counts);
        let weight2 = cumsum_rev(&counts);
        let sum1 = cumsum(&weighted);
        let sum2 = cumsum_rev(&weighted);

        let variance: Vec<f64> = (0..nbins - 1)
            .map(|i| {
                let (w1, w2) = (weight1[i], weight2[i + 1]);
                if w1 <= 0.0 || w2 <= 0.0 {
                    return 0.0;
                }
                let diff = sum1[i] / w1 - sum2[i + 1] / w2;
                w1 * w2 * diff * diff
            })
            .collect();

        argmax(&variance).map(|i| centers[i])
    }
}
