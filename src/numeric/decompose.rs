//! Single-component matrix decompositions.
//!
//! Both routines take a dense row-major matrix and return one value per row:
//! the projection onto the first principal axis (PCA) or the left factor of
//! a rank-1 non-negative factorization (NMF).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const POWER_ITERATIONS: usize = 200;
const POWER_TOL: f64 = 1e-12;
const NMF_MAX_ITER: usize = 200;
const NMF_TOL: f64 = 1e-4;
const NMF_EPS: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecompositionMethod {
    #[default]
    Pca,
    Nmf,
}

impl DecompositionMethod {
    pub fn name(self) -> &'static str {
        match self {
            DecompositionMethod::Pca => "pca",
            DecompositionMethod::Nmf => "nmf",
        }
    }

    pub fn fit_transform(self, matrix: &Matrix) -> Vec<f64> {
        match self {
            DecompositionMethod::Pca => pca_first_component(matrix),
            DecompositionMethod::Nmf => nmf_rank_one(matrix, NMF_MAX_ITER, NMF_TOL),
        }
    }
}

impl fmt::Display for DecompositionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown decomposition method: {0} (use pca|nmf)")]
pub struct UnknownDecomposition(pub String);

impl FromStr for DecompositionMethod {
    type Err = UnknownDecomposition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pca" => Ok(DecompositionMethod::Pca),
            "nmf" => Ok(DecompositionMethod::Nmf),
            _ => Err(UnknownDecomposition(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    pub fn from_column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

/// Scores on the first principal component. The sign is fixed so that the
/// entry with the largest magnitude is positive.
pub fn pca_first_component(matrix: &Matrix) -> Vec<f64> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows == 0 || cols == 0 {
        return vec![0.0; rows];
    }

    let mut means = vec![0.0; cols];
    for r in 0..rows {
        for (c, m) in means.iter_mut().enumerate() {
            *m += matrix.get(r, c);
        }
    }
    for m in &mut means {
        *m /= rows as f64;
    }

    let mut cov = vec![0.0; cols * cols];
    for r in 0..rows {
        let row = matrix.row(r);
        for i in 0..cols {
            let di = row[i] - means[i];
            for j in 0..cols {
                cov[i * cols + j] += di * (row[j] - means[j]);
            }
        }
    }

    let axis = leading_eigenvector(&cov, cols);

    let mut scores: Vec<f64> = (0..rows)
        .map(|r| {
            matrix
                .row(r)
                .iter()
                .zip(&means)
                .zip(&axis)
                .map(|((&x, &m), &v)| (x - m) * v)
                .sum()
        })
        .collect();

    let mut pivot = 0usize;
    for (i, s) in scores.iter().enumerate() {
        if s.abs() > scores[pivot].abs() {
            pivot = i;
        }
    }
    if scores[pivot] < 0.0 {
        for s in &mut scores {
            *s = -*s;
        }
    }
    scores
}

/// Left factor `W` of `X ~ W * H` with a single component.
///
/// Initialised from the leading singular triplet (NNDSVD) and refined with
/// multiplicative updates until the relative change in reconstruction
/// error drops below `tol`.
pub fn nmf_rank_one(matrix: &Matrix, max_iter: usize, tol: f64) -> Vec<f64> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows == 0 || cols == 0 {
        return vec![0.0; rows];
    }

    let mut gram = vec![0.0; cols * cols];
    for r in 0..rows {
        let row = matrix.row(r);
        for i in 0..cols {
            for j in 0..cols {
                gram[i * cols + j] += row[i].max(0.0) * row[j].max(0.0);
            }
        }
    }
    let v = leading_eigenvector(&gram, cols);
    let xv: Vec<f64> = (0..rows)
        .map(|r| matrix.row(r).iter().zip(&v).map(|(&x, &vi)| x.max(0.0) * vi).sum())
        .collect();
    let sigma = xv.iter().map(|x| x * x).sum::<f64>().sqrt();
    if sigma <= 0.0 {
        return vec![0.0; rows];
    }

    let root = sigma.sqrt();
    let mut w: Vec<f64> = xv.iter().map(|&x| root * (x / sigma).abs()).collect();
    let mut h: Vec<f64> = v.iter().map(|&x| root * x.abs()).collect();

    let mut prev_err = reconstruction_error(matrix, &w, &h);
    for _ in 0..max_iter {
        let ww: f64 = w.iter().map(|x| x * x).sum();
        for (j, hj) in h.iter_mut().enumerate() {
            let num: f64 = (0..rows).map(|r| w[r] * matrix.get(r, j).max(0.0)).sum();
            let den = ww * *hj + NMF_EPS;
            *hj *= num / den;
        }

        let hh: f64 = h.iter().map(|x| x * x).sum();
        for (r, wr) in w.iter_mut().enumerate() {
            let num: f64 = matrix
                .row(r)
                .iter()
                .zip(&h)
                .map(|(&x, &hj)| x.max(0.0) * hj)
                .sum();
            let den = *wr * hh + NMF_EPS;
            *wr *= num / den;
        }

        let err = reconstruction_error(matrix, &w, &h);
        let scale = prev_err.max(NMF_EPS);
        if (prev_err - err).abs() / scale < tol {
            break;
        }
        prev_err = err;
    }
    w
}

fn reconstruction_error(matrix: &Matrix, w: &[f64], h: &[f64]) -> f64 {
    let mut err = 0.0;
    for (r, &wr) in w.iter().enumerate() {
        for (c, &hc) in h.iter().enumerate() {
            let d = matrix.get(r, c).max(0.0) - wr * hc;
            err += d * d;
        }
    }
    err.sqrt()
}

fn leading_eigenvector(sym: &[f64], n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let mut v = vec![1.0 / (n as f64).sqrt(); n];
    for _ in 0..POWER_ITERATIONS {
        let mut next = vec![0.0; n];
        for i in 0..n {
            for j in 0..n {
                next[i] += sym[i * n + j] * v[j];
            }
        }
        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm <= 0.0 {
            let mut unit = vec![0.0; n];
            unit[0] = 1.0;
            return unit;
        }
        for x in &mut next {
            *x /= norm;
        }
        let delta: f64 = next.iter().zip(&v).map(|(a, b)| (a - b).abs()).sum();
        v = next;
        if delta < POWER_TOL {
            break;
        }
    }
    v
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/decompose.rs"]
mod tests;
