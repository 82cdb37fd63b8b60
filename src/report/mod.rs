pub mod json;
pub mod text;

use serde::Serialize;

use crate::thresholds::ThresholderConfig;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThresholdReport {
    pub tool: String,
    pub version: String,
    pub method: String,
    pub config: ThresholderConfig,
    pub n_scores: usize,
    pub threshold: f64,
    pub n_outliers: usize,
    pub outlier_fraction: f64,
    pub labels: Vec<u8>,
}

impl ThresholdReport {
    pub fn new(config: &ThresholderConfig, threshold: f64, labels: Vec<u8>) -> Self {
        let n_outliers = labels.iter().filter(|&&l| l == 1).count();
        Self {
            tool: "kira-scorethresh".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            method: config.method_name().to_string(),
            config: config.clone(),
            n_scores: labels.len(),
            threshold,
            n_outliers,
            outlier_fraction: fraction(n_outliers, labels.len()),
            labels,
        }
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
