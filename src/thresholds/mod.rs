pub mod aucp;
pub mod decomp;
pub mod fgd;
pub mod hist;
pub mod mcst;

use serde::{Deserialize, Serialize};

use crate::numeric::decompose::DecompositionMethod;
use crate::numeric::shapiro::ShapiroError;
use crate::numeric::{is_constant, normalize};

pub use aucp::Aucp;
pub use decomp::Decomp;
pub use fgd::Fgd;
pub use hist::{Hist, HistMethodKind};
pub use mcst::Mcst;

/// Cutoff above every normalized score: labels everything as inlier.
pub const ALL_INLIER_THRESHOLD: f64 = 1.1;

pub const DEFAULT_SEED: u64 = 1234;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThreshError {
    #[error("decision scores are empty")]
    Empty,
    #[error("decision score at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
    #[error(transparent)]
    Shapiro(#[from] ShapiroError),
}

pub trait Thresholder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Labels each score as inlier (0) or outlier (1) and retains the cutoff.
    fn eval(&mut self, scores: &[f64]) -> Result<Vec<u8>, ThreshError>;

    /// Cutoff chosen by the last successful `eval`, on the normalized scale.
    fn thresh(&self) -> Option<f64>;
}

pub fn validate_scores(scores: &[f64]) -> Result<(), ThreshError> {
    if scores.is_empty() {
        return Err(ThreshError::Empty);
    }
    for (index, &value) in scores.iter().enumerate() {
        if !value.is_finite() {
            return Err(ThreshError::NonFinite { index, value });
        }
    }
    Ok(())
}

/// Validates and normalizes. `None` means the scores are constant and carry
/// no separating information.
pub(crate) fn prepare_scores(scores: &[f64]) -> Result<Option<Vec<f64>>, ThreshError> {
    validate_scores(scores)?;
    if is_constant(scores) {
        tracing::debug!(
            n = scores.len(),
            "constant decision scores, labelling all as inliers"
        );
        return Ok(None);
    }
    Ok(Some(normalize(scores)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ThresholderConfig {
    Aucp,
    Decomp {
        #[serde(default)]
        decomp_method: DecompositionMethod,
    },
    Fgd,
    Hist {
        #[serde(default)]
        hist_method: HistMethodKind,
        #[serde(default)]
        nbins: Option<usize>,
    },
    Mcst {
        #[serde(default = "default_seed")]
        seed: u64,
    },
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for ThresholderConfig {
    fn default() -> Self {
        ThresholderConfig::Hist {
            hist_method: HistMethodKind::default(),
            nbins: None,
        }
    }
}

impl ThresholderConfig {
    pub fn method_name(&self) -> &'static str {
        match self {
            ThresholderConfig::Aucp => "aucp",
            ThresholderConfig::Decomp { .. } => "decomp",
            ThresholderConfig::Fgd => "fgd",
            ThresholderConfig::Hist { .. } => "hist",
            ThresholderConfig::Mcst { .. } => "mcst",
        }
    }

    pub fn build(&self) -> Box<dyn Thresholder> {
        match *self {
            ThresholderConfig::Aucp => Box::new(Aucp::new()),
            ThresholderConfig::Decomp { decomp_method } => Box::new(Decomp::new(decomp_method)),
            ThresholderConfig::Fgd => Box::new(Fgd::new()),
            ThresholderConfig::Hist { hist_method, nbins } => {
                Box::new(Hist::new(hist_method, nbins))
            }
            ThresholderConfig::Mcst { seed } => Box::new(Mcst::new(seed)),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

pub const METHOD_NAMES: [&str; 5] = ["aucp", "decomp", "fgd", "hist", "mcst"];

#[cfg(test)]
#[path = "../../tests/src_inline/thresholds/mod.rs"]
mod tests;
