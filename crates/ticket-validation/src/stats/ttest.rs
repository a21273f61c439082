//! Welch's unequal-variance t-test.

use serde::Serialize;

use super::descriptive::{mean, variance};
use super::special::student_t_two_sided;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WelchTTest {
    /// `(mean_a - mean_b) / se`
    pub t_statistic: f64,
    /// Welch-Satterthwaite degrees of freedom.
    pub degrees_of_freedom: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTTest, ValidationError> {
    ValidationError::require("welch_t_test", 2, a.len())?;
    ValidationError::require("welch_t_test", 2, b.len())?;

    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let (mean_a, mean_b) = (mean(a), mean(b));
    let se_a = variance(a, mean_a) / n_a;
    let se_b = variance(b, mean_b) / n_b;
    let se_sum = se_a + se_b;
    if se_sum == 0.0 {
        return Err(ValidationError::Degenerate {
            statistic: "welch_t_test",
            reason: "both samples have zero variance",
        });
    }

    let t_statistic = (mean_a - mean_b) / se_sum.sqrt();
    let degrees_of_freedom =
        se_sum * se_sum / (se_a * se_a / (n_a - 1.0) + se_b * se_b / (n_b - 1.0));

    Ok(WelchTTest {
        t_statistic,
        degrees_of_freedom,
        p_value: student_t_two_sided(t_statistic, degrees_of_freedom),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_sizes_and_variances() {
        // se^2 = 2.5/5 + 2.5/5 = 1, t = -2, df = 1 / (2 * 0.25 / 4) = 8
        let result = welch_t_test(&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();

        assert!((result.t_statistic + 2.0).abs() < 1e-12);
        assert!((result.degrees_of_freedom - 8.0).abs() < 1e-12);
        assert!((result.p_value - 0.080_516_3).abs() < 1e-6);
    }

    #[test]
    fn test_unequal_variances_reduce_df() {
        let result =
            welch_t_test(&[10.0, 11.0, 9.0, 10.5], &[1.0, 20.0, 5.0, 30.0, 12.0, 8.0]).unwrap();

        assert!(result.degrees_of_freedom < 8.0);
        assert!(result.degrees_of_freedom >= 1.0);
        assert!(result.p_value > 0.0 && result.p_value < 1.0);
    }

    #[test]
    fn test_identical_means() {
        let result = welch_t_test(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();

        assert_eq!(result.t_statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_is_degenerate() {
        assert!(matches!(
            welch_t_test(&[4.0, 4.0], &[4.0, 4.0, 4.0]),
            Err(ValidationError::Degenerate { .. })
        ));
    }
}
