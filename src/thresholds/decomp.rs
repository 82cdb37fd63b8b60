use crate::numeric::decompose::{DecompositionMethod, Matrix};
use crate::numeric::{cut, gen_cdf, normalize};
use crate::thresholds::{ALL_INLIER_THRESHOLD, ThreshError, Thresholder, prepare_scores};

#[derive(Debug, Clone, Default)]
pub struct Decomp {
    method: DecompositionMethod,
    thresh: Option<f64>,
}

impl Decomp {
    pub fn new(method: DecompositionMethod) -> Self {
        Self {
            method,
            thresh: None,
        }
    }

    pub fn method(&self) -> DecompositionMethod {
        self.method
    }
}

impl Thresholder for Decomp {
    fn name(&self) -> &'static str {
        "decomp"
    }

    fn eval(&mut self, scores: &[f64]) -> Result<Vec<u8>, ThreshError> {
        let Some(normalized) = prepare_scores(scores)? else {
            self.thresh = Some(ALL_INLIER_THRESHOLD);
            return Ok(vec![0; scores.len()]);
        };

        let cdf = gen_cdf(&normalized, 0.0, 1.0, normalized.len() * 3);
        let values = normalize(&cdf.values);
        let decomposed = self.method.fit_transform(&Matrix::from_column(&values));

        let mut limit = decomposed
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if !limit.is_finite() {
            limit = ALL_INLIER_THRESHOLD;
        } else if limit > 0.5 {
            // sign and scale are arbitrary, keep the cutoff in the low regime
            limit = 1.0 - limit;
        }

        tracing::debug!(method = %self.method, limit, "decomp threshold");
        self.thresh = Some(limit);
        Ok(cut(&normalized, limit))
    }

    fn thresh(&self) -> Option<f64> {
        self.thresh
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/thresholds/decomp.rs"]
mod tests;
