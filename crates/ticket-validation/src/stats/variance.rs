//! Levene's test for equal variances, median-centred (Brown-Forsythe).

use serde::Serialize;

use super::descriptive::{mean, median};
use super::special::f_sf;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Levene {
    pub statistic: f64,
    pub p_value: f64,
}

impl Levene {
    /// Equal variances are not rejected at `alpha`.
    pub fn equal_variances(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Compare the spread of two samples. Each needs at least two observations.
pub fn levene(a: &[f64], b: &[f64]) -> Result<Levene, ValidationError> {
    ValidationError::require("levene", 2, a.len())?;
    ValidationError::require("levene", 2, b.len())?;

    let deviations = |sample: &[f64]| -> Vec<f64> {
        let center = median(sample);
        sample.iter().map(|v| (v - center).abs()).collect()
    };
    let groups = [deviations(a), deviations(b)];

    let k = groups.len() as f64;
    let total: usize = groups.iter().map(Vec::len).sum();
    let grand_mean = groups.iter().flatten().sum::<f64>() / total as f64;

    let mut between = 0.0;
    let mut within = 0.0;
    for z in &groups {
        let group_mean = mean(z);
        between += z.len() as f64 * (group_mean - grand_mean).powi(2);
        within += z.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    if within == 0.0 {
        return Err(ValidationError::Degenerate {
            statistic: "levene",
            reason: "absolute deviations are constant within each group",
        });
    }

    let df_between = k - 1.0;
    let df_within = total as f64 - k;
    let statistic = (df_within * between) / (df_between * within);

    Ok(Levene {
        statistic,
        p_value: f_sf(statistic, df_between, df_within),
    })
}
