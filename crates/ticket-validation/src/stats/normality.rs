//! Shapiro-Wilk normality test (Royston's 1995 algorithm AS R94).

use serde::Serialize;

use super::descriptive::sorted;
use super::special::{normal_quantile, normal_sf};
use crate::error::ValidationError;

const MIN_N: usize = 3;
const MAX_N: usize = 5000;
const SMALL: f64 = 1e-19;

// Polynomial coefficients, lowest order first.
const C1: [f64; 6] = [0.0, 0.221_157, -0.147_981, -2.071_19, 4.434_685, -2.706_056];
const C2: [f64; 6] = [0.0, 0.042_981, -0.293_762, -1.752_461, 5.682_633, -3.582_633];
const C3: [f64; 4] = [0.544, -0.399_78, 0.025_054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.778_57, 0.062_767, -0.002_032_2];
const C5: [f64; 4] = [-1.5861, -0.310_82, -0.083_751, 0.003_891_5];
const C6: [f64; 3] = [-0.4803, -0.082_676, 0.003_030_2];
const G: [f64; 2] = [-2.273, 0.459];

/// Result of a Shapiro-Wilk test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapiroWilk {
    pub w: f64,
    pub p_value: f64,
}

impl ShapiroWilk {
    /// Normality is not rejected at `alpha`.
    pub fn is_normal(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Coefficients for the lower half of the order statistics, as positive weights.
fn half_coefficients(n: usize) -> Vec<f64> {
    let half = n / 2;
    if n == 3 {
        return vec![std::f64::consts::FRAC_1_SQRT_2];
    }

    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (1..=half)
        .map(|i| -normal_quantile((i as f64 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();

    let a1 = m[0] / ssumm2 + poly(&C1, rsn);
    let mut a = Vec::with_capacity(half);
    a.push(a1);

    let (first_scaled, fac) = if n > 5 {
        let a2 = m[1] / ssumm2 + poly(&C2, rsn);
        a.push(a2);
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };

    a.extend(m[first_scaled..].iter().map(|v| v / fac));
    a
}

/// Test a sample for normality.
///
/// Valid for `3 <= n <= 5000`. Fails with `Degenerate` when all values are equal.
pub fn shapiro_wilk(sample: &[f64]) -> Result<ShapiroWilk, ValidationError> {
    let n = sample.len();
    ValidationError::require("shapiro_wilk", MIN_N, n)?;
    if n > MAX_N {
        return Err(ValidationError::Degenerate {
            statistic: "shapiro_wilk",
            reason: "sample larger than 5000 observations",
        });
    }

    let x = sorted(sample);
    let range = x[n - 1] - x[0];
    if range < SMALL {
        return Err(ValidationError::Degenerate {
            statistic: "shapiro_wilk",
            reason: "all observations are equal",
        });
    }

    // Antisymmetric weights over the full sorted sample.
    let half = half_coefficients(n);
    let mut weights = vec![0.0; n];
    for (i, a) in half.iter().enumerate() {
        weights[i] = -a;
        weights[n - 1 - i] = *a;
    }

    // W as the squared correlation between data and weights; computing 1 - W
    // directly keeps precision when W is close to one.
    let scaled: Vec<f64> = x.iter().map(|v| v / range).collect();
    let mean_w = weights.iter().sum::<f64>() / n as f64;
    let mean_x = scaled.iter().sum::<f64>() / n as f64;
    let (mut ssa, mut ssx, mut sax) = (0.0, 0.0, 0.0);
    for (w, v) in weights.iter().zip(&scaled) {
        let dw = w - mean_w;
        let dx = v - mean_x;
        ssa += dw * dw;
        ssx += dx * dx;
        sax += dw * dx;
    }
    let root = (ssa * ssx).sqrt();
    let w1 = (root - sax) * (root + sax) / (ssa * ssx);
    let w = 1.0 - w1;

    Ok(ShapiroWilk {
        w,
        p_value: p_value(n, w, w1),
    })
}

fn p_value(n: usize, w: f64, w1: f64) -> f64 {
    if n == 3 {
        // Exact for n = 3
        const SIX_OVER_PI: f64 = 6.0 / std::f64::consts::PI;
        const ASIN_SQRT_3_4: f64 = std::f64::consts::FRAC_PI_3;
        return (SIX_OVER_PI * (w.sqrt().min(1.0).asin() - ASIN_SQRT_3_4)).clamp(0.0, 1.0);
    }

    let an = n as f64;
    let mut y = w1.ln();
    let (m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return 1e-99;
        }
        y = -(gamma - y).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let xx = an.ln();
        (poly(&C5, xx), poly(&C6, xx).exp())
    };

    normal_sf((y - m) / s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_are_normalized() {
        for n in [4, 5, 6, 11, 15, 50] {
            let half = half_coefficients(n);
            let total: f64 = 2.0 * half.iter().map(|a| a * a).sum::<f64>();
            assert!((total - 1.0).abs() < 1e-9, "n = {n}: {total}");
            assert!(half.windows(2).all(|p| p[0] > p[1]));
        }
    }

    #[test]
    fn test_reference_weights_sample() {
        let weights = [
            148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0,
        ];
        let result = shapiro_wilk(&weights).unwrap();

        assert!((result.w - 0.788_81).abs() < 1e-4);
        assert!((result.p_value - 0.006_704).abs() < 1e-4);
    }

    #[test]
    fn test_reference_linear_sample() {
        let result = shapiro_wilk(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert!((result.w - 0.986_76).abs() < 1e-4);
        assert!((result.p_value - 0.967_17).abs() < 1e-4);
    }

    #[test]
    fn test_three_equally_spaced() {
        let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();

        assert!((result.w - 1.0).abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_skewed() {
        let result = shapiro_wilk(&[1.0, 2.0, 10.0]).unwrap();

        assert!(result.w < 0.9);
        assert!(result.p_value > 0.0 && result.p_value < 0.3);
    }

    #[test]
    fn test_normal_like_sample_not_rejected() {
        let sample: Vec<f64> = (1..=15)
            .map(|i| normal_quantile((i as f64 - 0.375) / 15.25))
            .collect();
        let result = shapiro_wilk(&sample).unwrap();

        assert!(result.w > 0.98);
        assert!(result.is_normal(0.05));
    }

    #[test]
    fn test_exponential_like_sample_rejected() {
        let sample: Vec<f64> = (1..=15).map(|i| (i as f64 * 0.45).exp()).collect();
        let result = shapiro_wilk(&sample).unwrap();

        assert!(result.w < 0.8);
        assert!(!result.is_normal(0.05));
    }

    #[test]
    fn test_small_sample_branch() {
        let result = shapiro_wilk(&[2.0, 4.0, 5.0, 7.0, 9.0, 12.0, 13.0]).unwrap();

        assert!(result.w > 0.0 && result.w <= 1.0);
        assert!(result.p_value > 0.05);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            shapiro_wilk(&[1.0, 2.0]),
            Err(ValidationError::InsufficientData { .. })
        ));
        assert!(matches!(
            shapiro_wilk(&[4.0; 10]),
            Err(ValidationError::Degenerate { .. })
        ));
    }
}
