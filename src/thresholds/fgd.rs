//! Fixed gradient descent thresholder.

use crate::numeric::{cut, gen_kde, gradient};
use crate::thresholds::{ALL_INLIER_THRESHOLD, ThreshError, Thresholder, prepare_scores};

#[derive(Debug, Clone, Default)]
pub struct Fgd {
    thresh: Option<f64>,
}

impl Fgd {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Thresholder for Fgd {
    fn name(&self) -> &'static str {
        "fgd"
    }

    fn eval(&mut self, scores: &[f64]) -> Result<Vec<u8>, ThreshError> {
        let Some(normalized) = prepare_scores(scores)? else {
            self.thresh = Some(ALL_INLIER_THRESHOLD);
            return Ok(vec![0; scores.len()]);
        };

        let kde = gen_kde(&normalized, 0.0, 1.0, normalized.len() * 3);
        let deriv = gradient(&kde.values, kde.spacing());
        let peaks = turning_points(&deriv, 2);

        let limit = match peaks.as_slice() {
            [first, second, ..] => (kde.grid[*first] + kde.grid[*second]) * 0.5,
            _ => {
                tracing::debug!(found = peaks.len(), "fgd found fewer than two turning points");
                ALL_INLIER_THRESHOLD
            }
        };

        self.thresh = Some(limit);
        Ok(cut(&normalized, limit))
    }

    fn thresh(&self) -> Option<f64> {
        self.thresh
    }
}

/// First `max` indices `i` with `deriv[i] > 0` and `deriv[i + 1] <= 0`.
pub fn turning_points(deriv: &[f64], max: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(max);
    for i in 0..deriv.len().saturating_sub(1) {
        if deriv[i] > 0.0 && deriv[i + 1] <= 0.0 {
            out.push(i);
            if out.len() == max {
                break;
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/thresholds/fgd.rs"]
mod tests;
