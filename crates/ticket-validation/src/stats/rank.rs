//! Mann-Whitney U test.

use std::cmp::Ordering;

use serde::Serialize;

use super::special::normal_sf;
use crate::error::ValidationError;

/// Samples smaller than this (both, without ties) use the exact distribution.
const EXACT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MannWhitneyMethod {
    Exact,
    Asymptotic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MannWhitney {
    /// U statistic of the first sample.
    pub u_statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    pub method: MannWhitneyMethod,
}

/// Assign average ranks to sorted `(value, group)` pairs.
fn assign_ranks_with_ties(sorted: &[(f64, usize)]) -> (Vec<(f64, usize)>, Vec<usize>) {
    let mut ranks = Vec::with_capacity(sorted.len());
    let mut tie_sizes = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j + 1 < sorted.len() && sorted[j + 1].0 == sorted[i].0 {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        ranks.extend(sorted[i..=j].iter().map(|&(_, group)| (avg_rank, group)));
        if j > i {
            tie_sizes.push(j - i + 1);
        }
        i = j + 1;
    }
    (ranks, tie_sizes)
}

/// Number of arrangements giving each U in `0..=n_a * n_b`, without ties.
fn exact_u_frequencies(n_a: usize, n_b: usize) -> Vec<f64> {
    // table[i][j] holds the frequencies for sample sizes (i, j)
    let mut table: Vec<Vec<Vec<f64>>> = vec![vec![Vec::new(); n_b + 1]; n_a + 1];
    for i in 0..=n_a {
        for j in 0..=n_b {
            table[i][j] = if i == 0 || j == 0 {
                vec![1.0]
            } else {
                let mut freq = vec![0.0; i * j + 1];
                // Largest value from the first sample: it beats all j of the second.
                for (u, f) in table[i - 1][j].iter().enumerate() {
                    freq[u + j] += f;
                }
                for (u, f) in table[i][j - 1].iter().enumerate() {
                    freq[u] += f;
                }
                freq
            };
        }
    }
    std::mem::take(&mut table[n_a][n_b])
}

/// Two-sided Mann-Whitney U test of `a` against `b`.
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> Result<MannWhitney, ValidationError> {
    ValidationError::require("mann_whitney_u", 1, a.len())?;
    ValidationError::require("mann_whitney_u", 1, b.len())?;

    let (n_a, n_b) = (a.len(), b.len());
    let mut combined: Vec<(f64, usize)> = a
        .iter()
        .map(|&v| (v, 0))
        .chain(b.iter().map(|&v| (v, 1)))
        .collect();
    combined.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(Ordering::Equal));

    let (ranks, tie_sizes) = assign_ranks_with_ties(&combined);
    let rank_sum_a: f64 = ranks.iter().filter(|(_, g)| *g == 0).map(|(r, _)| r).sum();

    let product = (n_a * n_b) as f64;
    let u_a = rank_sum_a - (n_a * (n_a + 1)) as f64 / 2.0;
    let u_max = u_a.max(product - u_a);

    let (p_value, method) = if n_a < EXACT_LIMIT && n_b < EXACT_LIMIT && tie_sizes.is_empty() {
        let freq = exact_u_frequencies(n_a, n_b);
        let total: f64 = freq.iter().sum();
        // P(U >= u_max); u_max is an integer without ties
        let upper: f64 = freq[u_max.round() as usize..].iter().sum();
        (2.0 * upper / total, MannWhitneyMethod::Exact)
    } else {
        let n = (n_a + n_b) as f64;
        let tie_term: f64 = tie_sizes
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum();
        let sigma = (product / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)))).sqrt();
        if sigma == 0.0 {
            return Err(ValidationError::Degenerate {
                statistic: "mann_whitney_u",
                reason: "all observations are tied",
            });
        }
        let z = (u_max - product / 2.0 - 0.5) / sigma;
        (2.0 * normal_sf(z), MannWhitneyMethod::Asymptotic)
    };

    Ok(MannWhitney {
        u_statistic: u_a,
        p_value: p_value.clamp(0.0, 1.0),
        method,
    })
}
