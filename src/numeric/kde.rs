use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erf;

use crate::numeric::{linspace, std_sample};

#[derive(Debug, Clone, PartialEq)]
pub struct DensityEstimate {
    pub values: Vec<f64>,
    pub grid: Vec<f64>,
}

impl DensityEstimate {
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn spacing(&self) -> f64 {
        if self.grid.len() < 2 {
            0.0
        } else {
            self.grid[1] - self.grid[0]
        }
    }
}

/// Gaussian kernel density estimate with Scott's rule bandwidth.
#[derive(Debug, Clone)]
pub struct GaussianKde<'a> {
    samples: &'a [f64],
    bandwidth: f64,
}

impl<'a> GaussianKde<'a> {
    /// `fallback` is used whenever Scott's bandwidth collapses to zero.
    pub fn new(samples: &'a [f64], fallback: f64) -> Self {
        let scott = scott_bandwidth(samples);
        let bandwidth = if scott > 0.0 && scott.is_finite() {
            scott
        } else {
            fallback
        };
        Self { samples, bandwidth }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let h = self.bandwidth;
        let norm = 1.0 / ((2.0 * PI).sqrt() * h * self.samples.len() as f64);
        let mut sum = 0.0;
        for &s in self.samples {
            let z = (x - s) / h;
            sum += (-0.5 * z * z).exp();
        }
        sum * norm
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let h = self.bandwidth;
        let mut sum = 0.0;
        for &s in self.samples {
            sum += 0.5 * (1.0 + erf((x - s) / (h * SQRT_2)));
        }
        sum / self.samples.len() as f64
    }
}

pub fn scott_bandwidth(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n == 0 {
        return 0.0;
    }
    std_sample(samples) * (n as f64).powf(-0.2)
}

pub fn gen_kde(samples: &[f64], low: f64, high: f64, n: usize) -> DensityEstimate {
    let grid = linspace(low, high, n);
    let kde = GaussianKde::new(samples, fallback_bandwidth(low, high, n));
    let values = grid.iter().map(|&x| kde.pdf(x)).collect();
    DensityEstimate { values, grid }
}

pub fn gen_cdf(samples: &[f64], low: f64, high: f64, n: usize) -> DensityEstimate {
    let grid = linspace(low, high, n);
    let kde = GaussianKde::new(samples, fallback_bandwidth(low, high, n));
    let values = grid.iter().map(|&x| kde.cdf(x)).collect();
    DensityEstimate { values, grid }
}

fn fallback_bandwidth(low: f64, high: f64, n: usize) -> f64 {
    let width = (high - low).abs();
    if width > 0.0 {
        width / n.max(1) as f64
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/kde.rs"]
mod tests;
