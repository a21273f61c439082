//! Fixed-size weighted label tables.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Allowed distance between the weight sum and 1.0.
const SUM_TOLERANCE: f64 = 1e-9;

/// Error type for weight table construction.
#[derive(Debug, thiserror::Error)]
pub enum WeightTableError {
    /// Table has no labels
    #[error("Weight table is empty")]
    Empty,

    /// Negative, NaN or infinite weight
    #[error("Invalid weight {weight} at position {position}")]
    InvalidWeight { position: usize, weight: f64 },

    /// Weights do not form a probability distribution
    #[error("Weights sum to {0}, expected 1.0")]
    DoesNotSumToOne(f64),

    /// Rejected by the sampler
    #[error("Weighted index error: {0}")]
    Sampler(#[from] rand::distr::weighted::Error),
}

/// A label set paired with a parallel table of probabilities.
///
/// Validation happens once in [`WeightTable::new`]; sampling afterwards is a
/// total function.
#[derive(Debug, Clone)]
pub struct WeightTable<T, const N: usize> {
    labels: [T; N],
    weights: [f64; N],
    index: WeightedIndex<f64>,
}

impl<T: Copy, const N: usize> WeightTable<T, N> {
    /// Build a table from `(label, weight)` pairs. Weights must be finite,
    /// non-negative and sum to 1.
    pub fn new(entries: [(T, f64); N]) -> Result<Self, WeightTableError> {
        if N == 0 {
            return Err(WeightTableError::Empty);
        }

        let labels = entries.map(|(label, _)| label);
        let weights = entries.map(|(_, weight)| weight);

        if let Some((position, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(WeightTableError::InvalidWeight { position, weight });
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightTableError::DoesNotSumToOne(sum));
        }

        let index = WeightedIndex::new(weights.iter().copied())?;

        Ok(Self {
            labels,
            weights,
            index,
        })
    }

    /// Build a table where every label is equally likely.
    pub fn uniform(labels: [T; N]) -> Result<Self, WeightTableError> {
        let weight = 1.0 / N as f64;
        Self::new(labels.map(|label| (label, weight)))
    }

    /// Draw one label. Consumes exactly one draw from the sampler.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.labels[self.index.sample(rng)]
    }

    /// Labels in table order.
    pub fn labels(&self) -> &[T; N] {
        &self.labels
    }

    /// Probability attached to `label`, if it is part of the table.
    pub fn weight_of(&self, label: T) -> Option<f64>
    where
        T: PartialEq,
    {
        self.labels
            .iter()
            .position(|l| *l == label)
            .map(|i| self.weights[i])
    }
}
