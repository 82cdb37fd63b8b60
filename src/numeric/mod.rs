pub mod decompose;
pub mod histogram;
pub mod kde;
pub mod shapiro;

pub use kde::{DensityEstimate, gen_cdf, gen_kde};

/// Min-max rescale to [0,1]. A constant vector maps to all zeros.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let (min, max) = min_max(values);
    let span = max - min;
    if span <= 0.0 || span.is_nan() {
        return vec![0.0; values.len()];
    }
    if span.is_finite() {
        values.iter().map(|&v| (v - min) / span).collect()
    } else {
        // halve first so the span of extreme inputs stays representable
        let half_min = min * 0.5;
        let half_span = max * 0.5 - half_min;
        values
            .iter()
            .map(|&v| (v * 0.5 - half_min) / half_span)
            .collect()
    }
}

pub fn is_constant(values: &[f64]) -> bool {
    let (min, max) = min_max(values);
    max <= min || max.is_nan() || min.is_nan()
}

pub fn cut(scores: &[f64], limit: f64) -> Vec<u8> {
    scores.iter().map(|&v| u8::from(v > limit)).collect()
}

pub fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

pub fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| low + i as f64 * step).collect();
            out[n - 1] = high;
            out
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) * 0.5
    }
}

pub fn std_sample(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mu = mean(values);
    let ss: f64 = values.iter().map(|&v| (v - mu) * (v - mu)).sum();
    (ss / (n - 1) as f64).sqrt()
}

pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    let mut area = 0.0;
    for i in 1..n {
        area += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) * 0.5;
    }
    area
}

pub fn gradient(values: &[f64], spacing: f64) -> Vec<f64> {
    let n = values.len();
    if n < 2 || spacing == 0.0 {
        return vec![0.0; n];
    }
    let mut out = Vec::with_capacity(n);
    out.push((values[1] - values[0]) / spacing);
    for i in 1..n - 1 {
        out.push((values[i + 1] - values[i - 1]) / (2.0 * spacing));
    }
    out.push((values[n - 1] - values[n - 2]) / spacing);
    out
}

pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

pub fn argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/mod.rs"]
mod tests;
