use crate::numeric::linspace;

/// Equal-width histogram over [0,1]. The last bin is closed on the right,
/// values outside the range are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub counts: Vec<u64>,
    pub centers: Vec<f64>,
    pub edges: Vec<f64>,
}

impl Histogram {
    pub fn build(values: &[f64], nbins: usize) -> Self {
        let nbins = nbins.max(1);
        let edges = linspace(0.0, 1.0, nbins + 1);
        let mut counts = vec![0u64; nbins];

        for &v in values {
            if !(0.0..=1.0).contains(&v) {
                continue;
            }
            let mut idx = ((v * nbins as f64) as usize).min(nbins - 1);
            // float truncation can land one bin off the exact edges
            if idx > 0 && v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < nbins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        let centers = edges.windows(2).map(|w| (w[0] + w[1]) * 0.5).collect();

        Self {
            counts,
            centers,
            edges,
        }
    }

    pub fn nbins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        if self.edges.len() < 2 {
            0.0
        } else {
            self.edges[1] - self.edges[0]
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn counts_f64(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/histogram.rs"]
mod tests;
