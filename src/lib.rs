//! Unsupervised thresholding of outlier decision scores.
//!
//! Every strategy implements [`Thresholder`]: it normalizes the scores,
//! derives a cutoff from a density, CDF or histogram of them, and labels each
//! score as inlier (0) or outlier (1).

pub mod input;
pub mod numeric;
pub mod report;
pub mod thresholds;

pub use thresholds::{
    ALL_INLIER_THRESHOLD, Aucp, Decomp, Fgd, Hist, HistMethodKind, Mcst, ThreshError, Thresholder,
    ThresholderConfig, validate_scores,
};

#[cfg(test)]
#[path = "../tests/src_inline/properties.rs"]
mod properties;
