use crate::numeric::argmin;
use crate::numeric::histogram::Histogram;
use crate::thresholds::hist::HistMethod;

pub const MINIMUM_MAX_ITER: usize = 10_000;

/// Minimum method: smooth until the histogram is at most bimodal, then take
/// the lowest bin between the two peaks.
#[derive(Debug, Clone, Copy)]
pub struct Minimum {
    max_iter: usize,
}

impl Default for Minimum {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimum {
    pub const fn new() -> Self {
        Self {
            max_iter: MINIMUM_MAX_ITER,
        }
    }
}

impl HistMethod for Minimum {
    fn threshold(&self, hist: &Histogram, _scores: &[f64]) -> Option<f64> {
        let mut smooth = hist.counts_f64();
        let mut maxima = Vec::new();

        for _ in 0..self.max_iter {
            smooth = moving_average3(&smooth);
            maxima = local_maxima(&smooth);
            if maxima.len() < 3 {
                break;
            }
        }

        if maxima.len() > 2 {
            tracing::warn!(
                iterations = self.max_iter,
                maxima = maxima.len(),
                "minimum did not reach a bimodal histogram, using the first two peaks"
            );
        }
        let [first, second, ..] = maxima[..] else {
            tracing::debug!(maxima = maxima.len(), "minimum found fewer than two peaks");
            return None;
        };
        let offset = argmin(&smooth[first..=second])?;
        Some(hist.centers[first + offset])
    }
}

/// Three-point moving average with mirrored edges (`d c b a | a b c d | d c b a`).
pub fn moving_average3(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let left = if i == 0 { values[0] } else { values[i - 1] };
            let right = if i + 1 == n { values[n - 1] } else { values[i + 1] };
            (left + values[i] + right) / 3.0
        })
        .collect()
}

pub fn local_maxima(values: &[f64]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut rising = true;
    for i in 0..values.len().saturating_sub(1) {
        if rising {
            if values[i + 1] < values[i] {
                rising = false;
                out.push(i);
            }
        } else if values[i + 1] > values[i] {
            rising = true;
        }
    }
    out
}
