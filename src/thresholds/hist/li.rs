use crate::numeric::histogram::Histogram;
use crate::numeric::mean;
use crate::thresholds::hist::HistMethod;

pub const LI_MAX_ITER: usize = 1000;

/// Li's iterative minimum cross entropy.
///
/// Iterates on bin centers weighted by counts until successive guesses
/// differ by no more than half the smallest gap between distinct scores.
#[derive(Debug, Clone, Copy)]
pub struct Li {
    max_iter: usize,
}

impl Default for Li {
    fn default() -> Self {
        Self::new()
    }
}

impl Li {
    pub const fn new() -> Self {
        Self {
            max_iter: LI_MAX_ITER,
        }
    }

    pub const fn with_max_iter(max_iter: usize) -> Self {
        Self { max_iter }
    }
}

impl HistMethod for Li {
    fn threshold(&self, hist: &Histogram, scores: &[f64]) -> Option<f64> {
        let tolerance = min_gap(scores)? * 0.5;
        let mut t_next = mean(scores);
        let mut t_curr = -2.0 * tolerance;

        let mut iterations = 0usize;
        while (t_next - t_curr).abs() > tolerance {
            if iterations == self.max_iter {
                tracing::warn!(
                    iterations,
                    threshold = t_next,
                    "li did not converge, using last guess"
                );
                break;
            }
            iterations += 1;
            t_curr = t_next;

            let (mut in_sum, mut in_weight) = (0.0, 0.0);
            let (mut out_sum, mut out_weight) = (0.0, 0.0);
            for (&c, &k) in hist.centers.iter().zip(&hist.counts) {
                let k = k as f64;
                if c > t_curr {
                    out_sum += c * k;
                    out_weight += k;
                } else {
                    in_sum += c * k;
                    in_weight += k;
                }
            }
            if in_weight <= 0.0 || out_weight <= 0.0 {
                break;
            }
            let mean_in = in_sum / in_weight;
            let mean_out = out_sum / out_weight;
            if mean_in <= 0.0 || mean_out <= 0.0 || mean_in == mean_out {
                break;
            }

            t_next = (mean_in - mean_out) / (mean_in.ln() - mean_out.ln());
        }

        Some(t_next)
    }
}

fn min_gap(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .reduce(f64::min)
}
