use crate::numeric::histogram::Histogram;
use crate::thresholds::hist::{HistMethod, cumsum};

/// ISODATA (Ridler-Calvard): first bin center lying within one bin width
/// below the mean of the two class means.
#[derive(Debug, Clone, Copy, Default)]
pub struct Isodata;

impl HistMethod for Isodata {
    fn threshold(&self, hist: &Histogram, _scores: &[f64]) -> Option<f64> {
        let nbins = hist.nbins();
        if nbins < 2 {
            return None;
        }
        let counts = hist.counts_f64();
        let centers = &hist.centers;
        let bin_width = centers[1] - centers[0];

        let csum_low = cumsum(&counts);
        let total_count = csum_low[nbins - 1];
        let intensity: Vec<f64> = counts.iter().zip(centers).map(|(k, c)| k * c).collect();
        let csum_intensity = cumsum(&intensity);
        let total_intensity = csum_intensity[nbins - 1];

        (0..nbins - 1).find_map(|i| {
            let low_count = csum_low[i];
            let high_count = total_count - low_count;
            if low_count <= 0.0 || high_count <= 0.0 {
                return None;
            }
            let lower = csum_intensity[i] / low_count;
            let higher = (total_intensity - csum_intensity[i]) / high_count;
            let distance = (lower + higher) * 0.5 - centers[i];
            (distance >= 0.0 && distance < bin_width).then_some(centers[i])
        })
    }
}
