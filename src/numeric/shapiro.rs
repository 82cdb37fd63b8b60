//! Shapiro-Wilk W test for normality (Royston 1995, AS R94).
//!
//! Coefficients depend only on the sample size, so they are computed once
//! per length and reused across repeated tests of equally sized samples.

use statrs::distribution::{ContinuousCDF, Normal};

const SMALL: f64 = 1e-19;
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];
const SQRTH: f64 = std::f64::consts::FRAC_1_SQRT_2;
const PI6: f64 = 6.0 / std::f64::consts::PI;
const STQR: f64 = std::f64::consts::FRAC_PI_3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapiroError {
    #[error("Shapiro-Wilk needs at least 3 samples, got {0}")]
    TooFewSamples(usize),
    #[error("normal distribution unavailable: {0}")]
    Distribution(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    pub w: f64,
    pub p_value: f64,
}

/// Precomputed coefficients for samples of one fixed length.
#[derive(Debug, Clone)]
pub struct ShapiroWilkTest {
    n: usize,
    coeffs: Vec<f64>,
    normal: Normal,
}

impl ShapiroWilkTest {
    pub fn new(n: usize) -> Result<Self, ShapiroError> {
        if n < 3 {
            return Err(ShapiroError::TooFewSamples(n));
        }
        let normal =
            Normal::new(0.0, 1.0).map_err(|e| ShapiroError::Distribution(e.to_string()))?;
        let coeffs = coefficients(n, &normal);
        Ok(Self { n, coeffs, normal })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Test an ascending-sorted sample of exactly `self.len()` values.
    pub fn test_sorted(&self, sorted: &[f64]) -> Result<ShapiroWilk, ShapiroError> {
        if sorted.len() != self.n {
            return Err(ShapiroError::TooFewSamples(sorted.len()));
        }
        let n = self.n;
        let range = sorted[n - 1] - sorted[0];
        if range < SMALL {
            return Ok(ShapiroWilk {
                w: 1.0,
                p_value: 1.0,
            });
        }

        let scaled: Vec<f64> = sorted.iter().map(|&x| x / range).collect();
        let mean = scaled.iter().sum::<f64>() / n as f64;
        let ss: f64 = scaled.iter().map(|&x| (x - mean) * (x - mean)).sum();
        let mut num = 0.0;
        for (i, &a) in self.coeffs.iter().enumerate() {
            num += a * (scaled[n - 1 - i] - scaled[i]);
        }
        let w = if ss > 0.0 {
            (num * num / ss).min(1.0)
        } else {
            1.0
        };

        Ok(ShapiroWilk {
            w,
            p_value: self.p_value(w),
        })
    }

    pub fn test(&self, values: &[f64]) -> Result<ShapiroWilk, ShapiroError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.test_sorted(&sorted)
    }

    fn p_value(&self, w: f64) -> f64 {
        let n = self.n;
        if n == 3 {
            let pw = PI6 * (w.max(0.75).sqrt().asin() - STQR);
            return pw.clamp(0.0, 1.0);
        }

        let an = n as f64;
        let y = (1.0 - w).ln();
        let (m, s, y) = if n <= 11 {
            let gamma = poly(&G, an);
            if y >= gamma {
                return 1e-99;
            }
            let y = -(gamma - y).ln();
            (poly(&C3, an), poly(&C4, an).exp(), y)
        } else {
            let xx = an.ln();
            (poly(&C5, xx), poly(&C6, xx).exp(), y)
        };
        if !y.is_finite() {
            // w == 1 exactly
            return 1.0;
        }
        self.normal.sf((y - m) / s).clamp(0.0, 1.0)
    }
}

pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilk, ShapiroError> {
    ShapiroWilkTest::new(values.len())?.test(values)
}

/// Positive coefficients for the upper half of the order statistics.
fn coefficients(n: usize, normal: &Normal) -> Vec<f64> {
    let nn2 = n / 2;
    if n == 3 {
        return vec![SQRTH];
    }

    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (1..=nn2)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|x| x * x).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;

    let mut a = vec![0.0; nn2];
    let (first, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        a[1] = a2;
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };
    a[0] = a1;
    for i in first..nn2 {
        a[i] = -m[i] / fac;
    }
    a
}

fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/shapiro.rs"]
mod tests;
