//! Effect size measures.

use std::fmt;

use serde::Serialize;

use super::descriptive::{mean, variance};
use crate::error::ValidationError;

/// Cohen's conventional effect size bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSizeInterpretation {
    /// |d| < 0.2
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectSizeInterpretation {
    pub fn from_d(d: f64) -> Self {
        let d = d.abs();
        if d < 0.2 {
            Self::Negligible
        } else if d < 0.5 {
            Self::Small
        } else if d < 0.8 {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectSize {
    pub cohens_d: f64,
    pub hedges_g: f64,
    pub interpretation: EffectSizeInterpretation,
    /// `|(mean_b - mean_a) / mean_a| * 100`
    pub relative_change_percent: f64,
}

/// Cohen's d of `b` relative to `a`, using the average of the two variances.
pub fn cohens_d(a: &[f64], b: &[f64]) -> Result<f64, ValidationError> {
    ValidationError::require("cohens_d", 2, a.len())?;
    ValidationError::require("cohens_d", 2, b.len())?;

    let (mean_a, mean_b) = (mean(a), mean(b));
    let pooled = ((variance(a, mean_a) + variance(b, mean_b)) / 2.0).sqrt();
    if pooled == 0.0 {
        return Err(ValidationError::Degenerate {
            statistic: "cohens_d",
            reason: "both samples have zero variance",
        });
    }
    Ok((mean_b - mean_a) / pooled)
}

/// Small-sample bias correction of Cohen's d.
pub fn hedges_g(d: f64, n_a: usize, n_b: usize) -> f64 {
    d * (1.0 - 3.0 / (4.0 * (n_a + n_b) as f64 - 9.0))
}

/// Relative change of the mean of `b` over `a`, in percent.
pub fn relative_change(a: &[f64], b: &[f64]) -> Result<f64, ValidationError> {
    let mean_a = mean(a);
    if mean_a == 0.0 {
        return Err(ValidationError::Degenerate {
            statistic: "relative_change",
            reason: "control mean is zero",
        });
    }
    Ok(((mean(b) - mean_a) / mean_a).abs() * 100.0)
}

pub fn effect_size(a: &[f64], b: &[f64]) -> Result<EffectSize, ValidationError> {
    let d = cohens_d(a, b)?;
    Ok(EffectSize {
        cohens_d: d,
        hedges_g: hedges_g(d, a.len(), b.len()),
        interpretation: EffectSizeInterpretation::from_d(d),
        relative_change_percent: relative_change(a, b)?,
    })
}
