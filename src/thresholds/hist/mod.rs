//! Histogram thresholders.
//!
//! One histogram of the normalized scores feeds one of six classical
//! criteria. Unlike the other strategies the labels compare the normalized
//! scores against the returned bin-space cutoff directly.

pub mod isodata;
pub mod li;
pub mod minimum;
pub mod otsu;
pub mod triangle;
pub mod yen;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::numeric::histogram::Histogram;
use crate::thresholds::{ALL_INLIER_THRESHOLD, ThreshError, Thresholder, prepare_scores};

pub use isodata::Isodata;
pub use li::Li;
pub use minimum::Minimum;
pub use otsu::Otsu;
pub use triangle::Triangle;
pub use yen::Yen;

pub const DEFAULT_BIN_RATIO: f64 = 0.7;
pub const MIN_BINS: usize = 2;

/// A histogram thresholding criterion. `None` means the criterion has no
/// answer for this histogram.
pub trait HistMethod: Send + Sync {
    fn threshold(&self, hist: &Histogram, scores: &[f64]) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistMethodKind {
    #[default]
    Otsu,
    Yen,
    Isodata,
    Li,
    Minimum,
    Triangle,
}

static OTSU: Otsu = Otsu;
static YEN: Yen = Yen;
static ISODATA: Isodata = Isodata;
static LI: Li = Li::new();
static MINIMUM: Minimum = Minimum::new();
static TRIANGLE: Triangle = Triangle;

impl HistMethodKind {
    pub const ALL: [HistMethodKind; 6] = [
        HistMethodKind::Otsu,
        HistMethodKind::Yen,
        HistMethodKind::Isodata,
        HistMethodKind::Li,
        HistMethodKind::Minimum,
        HistMethodKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HistMethodKind::Otsu => "otsu",
            HistMethodKind::Yen => "yen",
            HistMethodKind::Isodata => "isodata",
            HistMethodKind::Li => "li",
            HistMethodKind::Minimum => "minimum",
            HistMethodKind::Triangle => "triangle",
        }
    }

    pub fn method(self) -> &'static dyn HistMethod {
        match self {
            HistMethodKind::Otsu => &OTSU,
            HistMethodKind::Yen => &YEN,
            HistMethodKind::Isodata => &ISODATA,
            HistMethodKind::Li => &LI,
            HistMethodKind::Minimum => &MINIMUM,
            HistMethodKind::Triangle => &TRIANGLE,
        }
    }
}

impl fmt::Display for HistMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown histogram method: {0} (use otsu|yen|isodata|li|minimum|triangle)")]
pub struct UnknownHistMethod(pub String);

impl FromStr for HistMethodKind {
    type Err = UnknownHistMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        HistMethodKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| UnknownHistMethod(s.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Hist {
    method: HistMethodKind,
    nbins: Option<usize>,
    thresh: Option<f64>,
}

impl Hist {
    pub fn new(method: HistMethodKind, nbins: Option<usize>) -> Self {
        Self {
            method,
            nbins,
            thresh: None,
        }
    }

    pub fn method(&self) -> HistMethodKind {
        self.method
    }

    pub fn nbins(&self) -> Option<usize> {
        self.nbins
    }

    pub fn resolve_bins(&self, n: usize) -> usize {
        self.nbins
            .unwrap_or_else(|| (DEFAULT_BIN_RATIO * n as f64).round() as usize)
            .max(MIN_BINS)
    }
}

impl Thresholder for Hist {
    fn name(&self) -> &'static str {
        "hist"
    }

    fn eval(&mut self, scores: &[f64]) -> Result<Vec<u8>, ThreshError> {
        let Some(normalized) = prepare_scores(scores)? else {
            self.thresh = Some(ALL_INLIER_THRESHOLD);
            return Ok(vec![0; scores.len()]);
        };

        let nbins = self.resolve_bins(normalized.len());
        let hist = Histogram::build(&normalized, nbins);
        let limit = match self.method.method().threshold(&hist, &normalized) {
            Some(t) if t.is_finite() => t,
            _ => {
                tracing::warn!(
                    method = %self.method,
                    nbins,
                    "histogram criterion found no cutoff, labelling all as inliers"
                );
                ALL_INLIER_THRESHOLD
            }
        };
        tracing::debug!(method = %self.method, nbins, limit, "hist threshold");

        self.thresh = Some(limit);
        Ok(normalized.iter().map(|&v| u8::from(v > limit)).collect())
    }

    fn thresh(&self) -> Option<f64> {
        self.thresh
    }
}

pub(crate) fn cumsum(values: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|&v| {
            acc += v;
            acc
        })
        .collect()
}

pub(crate) fn cumsum_rev(values: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; values.len()];
    let mut acc = 0.0;
    for i in (0..values.len()).rev() {
        acc += values[i];
        out[i] = acc;
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/src_inline/thresholds/hist/mod.rs"]
mod tests;
