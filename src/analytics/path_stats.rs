// src/analytics/path_stats.rs
//! Sample statistics of a walk's increments, and the discrete sums behind
//! Ito's Lemma.
//!
//! For a Wiener process the quadratic variation over `[0, T]` is `T`, which is
//! the `dW² = dt` rule used when expanding `df(S, t)`. For this walk the
//! increments have variance `dt²`, so the quadratic variation of an N-step
//! path concentrates around `N·dt²`.

use crate::path::Path;
use statrs::statistics::Statistics;

/// Moments of a path's increments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncrementStats {
    pub count: usize,
    pub mean: f64,
    /// Unbiased sample variance; zero for a single increment
    pub variance: f64,
}

impl IncrementStats {
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Sample mean and variance of `value[i] - value[i-1]`.
///
/// Returns `None` for a path with no increments.
pub fn increment_stats(path: &Path) -> Option<IncrementStats> {
    let increments: Vec<f64> = path.increments().collect();
    if increments.is_empty() {
        return None;
    }

    let mean = increments.iter().mean();
    let variance = if increments.len() > 1 {
        increments.iter().variance()
    } else {
        0.0
    };

    Some(IncrementStats {
        count: increments.len(),
        mean,
        variance,
    })
}

/// Sum of squared increments
pub fn quadratic_variation(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|w| {
            let diff = w[1] - w[0];
            diff * diff
        })
        .sum()
}

/// Left-point sum `Σ f(W_i) (W_{i+1} - W_i)`, the discrete Ito integral
pub fn ito_sum<F>(values: &[f64], f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    values.windows(2).map(|w| f(w[0]) * (w[1] - w[0])).sum()
}

/// Midpoint sum `Σ f((W_i + W_{i+1})/2) (W_{i+1} - W_i)`, the discrete
/// Stratonovich integral
pub fn stratonovich_sum<F>(values: &[f64], f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    values
        .windows(2)
        .map(|w| f(0.5 * (w[0] + w[1])) * (w[1] - w[0]))
        .sum()
}
