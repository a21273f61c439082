//! Bootstrap confidence interval and leave-one-out sensitivity.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use super::descriptive::{mean, quantile, variance};
use super::ttest::welch_t_test;
use crate::error::ValidationError;

/// Percentile bootstrap of `mean_b - mean_a`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bootstrap {
    pub resamples: usize,
    pub seed: u64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// `2 * P(diff >= 0)`, capped at 1.
    pub p_value: f64,
    pub mean_difference: f64,
    pub std_difference: f64,
}

impl Bootstrap {
    /// The 95% interval lies entirely on one side of zero.
    pub fn excludes_zero(&self) -> bool {
        self.ci_upper < 0.0 || self.ci_lower > 0.0
    }
}

fn resample_mean<R: Rng + ?Sized>(rng: &mut R, sample: &[f64]) -> f64 {
    let total: f64 = (0..sample.len())
        .map(|_| sample[rng.random_range(0..sample.len())])
        .sum();
    total / sample.len() as f64
}

/// Bootstrap the difference of means with a seeded generator.
///
/// Each resample draws `a.len()` indices from `a`, then `b.len()` from `b`.
pub fn bootstrap_mean_difference(
    a: &[f64],
    b: &[f64],
    resamples: usize,
    seed: u64,
) -> Result<Bootstrap, ValidationError> {
    ValidationError::require("bootstrap", 1, a.len())?;
    ValidationError::require("bootstrap", 1, b.len())?;
    ValidationError::require("bootstrap resamples", 1, resamples)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let diffs: Vec<f64> = (0..resamples)
        .map(|_| {
            let mean_a = resample_mean(&mut rng, a);
            let mean_b = resample_mean(&mut rng, b);
            mean_b - mean_a
        })
        .collect();

    let non_negative = diffs.iter().filter(|d| **d >= 0.0).count();
    let mean_difference = mean(&diffs);

    debug!(
        "Bootstrap: {} resamples, {} non-negative differences",
        resamples, non_negative
    );

    Ok(Bootstrap {
        resamples,
        seed,
        ci_lower: quantile(&diffs, 0.025),
        ci_upper: quantile(&diffs, 0.975),
        p_value: (2.0 * non_negative as f64 / resamples as f64).min(1.0),
        mean_difference,
        std_difference: variance(&diffs, mean_difference).sqrt(),
    })
}

/// Welch p-values with each observation removed in turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveOneOut {
    /// `a` deletions first, then `b` deletions.
    pub p_values: Vec<f64>,
    pub min_p: f64,
    pub max_p: f64,
    pub all_significant: bool,
}

pub fn leave_one_out(a: &[f64], b: &[f64], alpha: f64) -> Result<LeaveOneOut, ValidationError> {
    ValidationError::require("leave_one_out", 3, a.len())?;
    ValidationError::require("leave_one_out", 3, b.len())?;

    let without = |sample: &[f64], skip: usize| -> Vec<f64> {
        sample
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, v)| *v)
            .collect()
    };

    let mut p_values = Vec::with_capacity(a.len() + b.len());
    for i in 0..a.len() {
        p_values.push(welch_t_test(&without(a, i), b)?.p_value);
    }
    for i in 0..b.len() {
        p_values.push(welch_t_test(a, &without(b, i))?.p_value);
    }

    let min_p = p_values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_p = p_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(LeaveOneOut {
        all_significant: p_values.iter().all(|p| *p < alpha),
        p_values,
        min_p,
        max_p,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROL: [f64; 8] = [12.0, 14.0, 11.0, 15.0, 13.0, 16.0, 12.0, 14.0];
    const TREATMENT: [f64; 8] = [8.0, 9.0, 7.0, 10.0, 9.0, 8.0, 11.0, 9.0];

    #[test]
    fn test_bootstrap_is_deterministic() {
        let first = bootstrap_mean_difference(&CONTROL, &TREATMENT, 2000, 42).unwrap();
        let second = bootstrap_mean_difference(&CONTROL, &TREATMENT, 2000, 42).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_bootstrap_detects_clear_reduction() {
        let result = bootstrap_mean_difference(&CONTROL, &TREATMENT, 5000, 42).unwrap();

        assert!(result.ci_lower <= result.ci_upper);
        assert!(result.ci_upper < 0.0);
        assert!(result.excludes_zero());
        assert_eq!(result.p_value, 0.0);
        // Observed difference is -4.5
        assert!((result.mean_difference + 4.5).abs() < 0.2);
    }

    #[test]
    fn test_bootstrap_no_effect_includes_zero() {
        let result = bootstrap_mean_difference(&CONTROL, &CONTROL, 5000, 7).unwrap();

        assert!(result.ci_lower < 0.0 && result.ci_upper > 0.0);
        assert!(!result.excludes_zero());
        assert!(result.p_value > 0.5);
    }

    #[test]
    fn test_bootstrap_needs_resamples() {
        assert!(bootstrap_mean_difference(&CONTROL, &TREATMENT, 0, 42).is_err());
    }

    #[test]
    fn test_leave_one_out() {
        let result = leave_one_out(&CONTROL, &TREATMENT, 0.05).unwrap();

        assert_eq!(result.p_values.len(), 16);
        assert!(result.min_p <= result.max_p);
        assert!(result.max_p < 0.05);
        assert!(result.all_significant);
    }

    #[test]
    fn test_leave_one_out_order() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 3.0, 4.0, 9.0];
        let result = leave_one_out(&a, &b, 0.05).unwrap();

        let dropped_outlier = welch_t_test(&a, &[2.0, 3.0, 4.0]).unwrap().p_value;
        assert_eq!(result.p_values[7], dropped_outlier);
        assert!(!result.all_significant);
    }
}
