//! Descriptive statistics.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::ValidationError;

/// Summary of one group's per-classroom counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub n: usize,
    pub sum: f64,
    pub mean: f64,
    /// Sample standard deviation (`ddof = 1`).
    pub std: f64,
    pub median: f64,
}

/// Describe a sample. Needs at least two observations for the standard deviation.
pub fn describe(sample: &[f64]) -> Result<Description, ValidationError> {
    ValidationError::require("describe", 2, sample.len())?;
    let mean = mean(sample);
    Ok(Description {
        n: sample.len(),
        sum: sample.iter().sum(),
        mean,
        std: variance(sample, mean).sqrt(),
        median: median(sample),
    })
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Unbiased sample variance around `center`.
pub fn variance(values: &[f64], center: f64) -> f64 {
    if values.len() <= 1 {
        0.0
    } else {
        values
            .iter()
            .map(|v| (v - center) * (v - center))
            .sum::<f64>()
            / (values.len() - 1) as f64
    }
}

pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Quantile with linear interpolation between order statistics.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted(values);
    let q = q.clamp(0.0, 1.0);
    let idx = q * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let t = idx - lo as f64;
        sorted[lo] * (1.0 - t) + sorted[hi] * t
    }
}

/// Central moments `(m2, m3, m4)` with divisor `n`.
fn central_moments(values: &[f64]) -> (f64, f64, f64) {
    let m = mean(values);
    let n = values.len() as f64;
    values.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), v| {
        let d = v - m;
        (m2 + d * d / n, m3 + d * d * d / n, m4 + d * d * d * d / n)
    })
}

fn nonzero_spread(
    statistic: &'static str,
    values: &[f64],
) -> Result<(f64, f64, f64), ValidationError> {
    ValidationError::require(statistic, 2, values.len())?;
    let moments = central_moments(values);
    if moments.0 <= f64::EPSILON * mean(values).abs().max(1.0) {
        return Err(ValidationError::Degenerate {
            statistic,
            reason: "all observations are equal",
        });
    }
    Ok(moments)
}

/// Biased sample skewness `m3 / m2^1.5`.
pub fn skewness(values: &[f64]) -> Result<f64, ValidationError> {
    let (m2, m3, _) = nonzero_spread("skewness", values)?;
    Ok(m3 / m2.powf(1.5))
}

/// Biased excess kurtosis `m4 / m2^2 - 3`.
pub fn kurtosis(values: &[f64]) -> Result<f64, ValidationError> {
    let (m2, _, m4) = nonzero_spread("kurtosis", values)?;
    Ok(m4 / (m2 * m2) - 3.0)
}
