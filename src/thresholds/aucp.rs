//! Area-under-curve percentage thresholder.
//!
//! Outliers are the scores past the first grid point where the area under
//! the normalized KDE to its right falls below `median + |median - mean|`
//! of the total area.

use crate::numeric::{cut, gen_kde, mean, median, normalize};
use crate::thresholds::{ALL_INLIER_THRESHOLD, ThreshError, Thresholder, prepare_scores};

/// Used when the tail area never drops below the limit.
pub const NO_CROSSING_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct Aucp {
    thresh: Option<f64>,
}

impl Aucp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Thresholder for Aucp {
    fn name(&self) -> &'static str {
        "aucp"
    }

    fn eval(&mut self, scores: &[f64]) -> Result<Vec<u8>, ThreshError> {
        let Some(normalized) = prepare_scores(scores)? else {
            self.thresh = Some(ALL_INLIER_THRESHOLD);
            return Ok(vec![0; scores.len()]);
        };

        let limit = area_limit(&normalized);
        tracing::debug!(limit, "aucp threshold");
        self.thresh = Some(limit);
        Ok(cut(&normalized, limit))
    }

    fn thresh(&self) -> Option<f64> {
        self.thresh
    }
}

fn area_limit(normalized: &[f64]) -> f64 {
    let kde = gen_kde(normalized, 0.0, 1.0, normalized.len() * 2);
    let values = normalize(&kde.values);
    let grid = &kde.grid;

    // tail[i] is the trapezoid area from grid[i] to the end
    let m = grid.len();
    let mut tail = vec![0.0; m];
    for i in (0..m.saturating_sub(1)).rev() {
        tail[i] = tail[i + 1] + (grid[i + 1] - grid[i]) * (values[i] + values[i + 1]) * 0.5;
    }
    let total = tail.first().copied().unwrap_or(0.0);

    let med = median(normalized);
    let perc = med + (med - mean(normalized)).abs();
    let target = perc * total;

    tail.iter()
        .position(|&area| area < target)
        .map(|i| grid[i])
        .unwrap_or(NO_CROSSING_THRESHOLD)
}

#[cfg(test)]
#[path = "../../tests/src_inline/thresholds/aucp.rs"]
mod tests;
