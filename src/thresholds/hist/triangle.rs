use crate::numeric::argmax;
use crate::numeric::histogram::Histogram;
use crate::thresholds::hist::HistMethod;

/// Triangle (Zack): bin furthest from the line joining the histogram peak to
/// the far end of its longer tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

impl HistMethod for Triangle {
    fn threshold(&self, hist: &Histogram, _scores: &[f64]) -> Option<f64> {
        let nbins = hist.nbins();
        let mut counts = hist.counts_f64();

        let mut peak = argmax(&counts)?;
        let peak_height = counts[peak];
        let mut low = hist.counts.iter().position(|&c| c > 0)?;
        let high = hist.counts.iter().rposition(|&c| c > 0)?;

        // mirror when the left tail is the shorter one
        let flip = peak - low < high - peak;
        if flip {
            counts.reverse();
            low = nbins - high - 1;
            peak = nbins - peak - 1;
        }

        let width = peak - low;
        if width == 0 {
            return None;
        }
        let norm = (peak_height * peak_height + (width * width) as f64).sqrt();
        let height_n = peak_height / norm;
        let width_n = width as f64 / norm;

        let lengths: Vec<f64> = (0..width)
            .map(|x| height_n * x as f64 - width_n * counts[x + low])
            .collect();
        let mut level = argmax(&lengths)? + low;
        if flip {
            level = nbins - level - 1;
        }
        Some(hist.centers[level])
    }
}
