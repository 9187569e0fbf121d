//! Weighted random choice over a fixed label set
//!
//! Weighted tables are backed by rand's [`WeightedIndex`], so label *i* is
//! picked with probability `weight[i] / sum(weights)`. The random source is
//! always passed in, which keeps draws reproducible under a seeded `StdRng`.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;
use thiserror::Error;

/// Errors raised while building a weighted choice table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    /// No labels to choose from
    #[error("label set is empty")]
    EmptyLabels,

    /// Weight list is not parallel to the label list
    #[error("{weights} weights supplied for {labels} labels")]
    CountMismatch {
        /// Number of labels
        labels: usize,
        /// Number of weights
        weights: usize,
    },

    /// A weight of zero would make its label unreachable
    #[error("weight at position {index} must be positive")]
    ZeroWeight {
        /// Position of the zero weight
        index: usize,
    },

    /// The sampler rejected the weight table
    #[error("invalid weight table: {0}")]
    Distribution(#[from] WeightedError),
}

#[derive(Debug, Clone)]
struct WeightTable {
    weights: Vec<u32>,
    total: u64,
    index: WeightedIndex<u64>,
}

/// A label set with optional relative weights
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    labels: Vec<T>,
    /// `None` selects uniformly
    table: Option<WeightTable>,
}

impl<T> WeightedChoice<T> {
    /// Build a choice table; `None` weights means every label is equally likely
    pub fn new(labels: Vec<T>, weights: Option<&[u32]>) -> Result<Self, WeightError> {
        if labels.is_empty() {
            return Err(WeightError::EmptyLabels);
        }

        let table = match weights {
            None => None,
            Some(weights) => {
                if weights.len() != labels.len() {
                    return Err(WeightError::CountMismatch {
                        labels: labels.len(),
                        weights: weights.len(),
                    });
                }
                if let Some(index) = weights.iter().position(|&w| w == 0) {
                    return Err(WeightError::ZeroWeight { index });
                }
                // widened so that no table of u32 weights can overflow the total
                let index = WeightedIndex::new(weights.iter().map(|&w| u64::from(w)))?;
                Some(WeightTable {
                    weights: weights.to_vec(),
                    total: weights.iter().map(|&w| u64::from(w)).sum(),
                    index,
                })
            }
        };

        Ok(Self { labels, table })
    }

    /// Build an unweighted choice table
    pub fn uniform(labels: Vec<T>) -> Result<Self, WeightError> {
        Self::new(labels, None)
    }

    /// Build a weighted choice table
    pub fn weighted(labels: Vec<T>, weights: &[u32]) -> Result<Self, WeightError> {
        Self::new(labels, Some(weights))
    }

    /// Draw one label
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let index = match &self.table {
            Some(table) => table.index.sample(rng),
            None => rng.gen_range(0..self.labels.len()),
        };
        &self.labels[index]
    }

    /// Labels in declaration order
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Whether explicit weights were supplied
    pub fn is_weighted(&self) -> bool {
        self.table.is_some()
    }

    /// Configured probability of the label at `index`
    pub fn probability(&self, index: usize) -> f64 {
        if index >= self.labels.len() {
            return 0.0;
        }
        match &self.table {
            Some(table) => f64::from(table.weights[index]) / table.total as f64,
            None => 1.0 / self.labels.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_label_always_drawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let choice = WeightedChoice::weighted(vec!["only"], &[5]).unwrap();
        for _ in 0..100 {
            assert_eq!(*choice.sample(&mut rng), "only");
        }
    }

    #[test]
    fn test_draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let choice = WeightedChoice::weighted(vec![0usize, 1, 2], &[1, 1000, 1]).unwrap();
        for _ in 0..1000 {
            assert!(*choice.sample(&mut rng) < 3);
        }
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(5);
        let choice = WeightedChoice::weighted(vec!['a', 'b', 'c'], &[u32::MAX; 3]).unwrap();
        assert!((choice.probability(1) - 1.0 / 3.0).abs() < 1e-12);
        choice.sample(&mut rng);
    }

    #[test]
    fn test_sampler_error_conversion() {
        let err = WeightError::from(WeightedError::AllWeightsZero);
        assert_eq!(err, WeightError::Distribution(WeightedError::AllWeightsZero));
        assert!(err.to_string().starts_with("invalid weight table"));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(WeightedChoice::<u8>::uniform(vec![]).unwrap_err(), WeightError::EmptyLabels);
        assert_eq!(
            WeightedChoice::weighted(vec!['a', 'b', 'c'], &[1, 2]).unwrap_err(),
            WeightError::CountMismatch { labels: 3, weights: 2 }
        );
        assert_eq!(
            WeightedChoice::weighted(vec!['a', 'b'], &[1, 0]).unwrap_err(),
            WeightError::ZeroWeight { index: 1 }
        );
    }

    #[test]
    fn test_probability() {
        let choice = WeightedChoice::weighted(vec!["5s", "1", "30"], &[100, 20, 80]).unwrap();
        assert!(choice.is_weighted());
        assert!((choice.probability(0) - 0.5).abs() < f64::EPSILON);
        assert!((choice.probability(1) - 0.1).abs() < f64::EPSILON);
        assert!((choice.probability(2) - 0.4).abs() < f64::EPSILON);
        assert_eq!(choice.probability(3), 0.0);

        let uniform = WeightedChoice::uniform(vec![1, 2, 3, 4]).unwrap();
        assert!(!uniform.is_weighted());
        assert!((uniform.probability(2) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let choice = WeightedChoice::weighted(vec![0, 1, 2, 3], &[4, 3, 2, 1]).unwrap();
        let mut first = StdRng::seed_from_u64(2024);
        let mut second = StdRng::seed_from_u64(2024);

        let a: Vec<i32> = (0..200).map(|_| *choice.sample(&mut first)).collect();
        let b: Vec<i32> = (0..200).map(|_| *choice.sample(&mut second)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_weighted_frequencies() {
        let choice = WeightedChoice::weighted(vec!['x', 'y'], &[3, 1]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let draws = 40_000;
        let hits = (0..draws).filter(|_| *choice.sample(&mut rng) == 'x').count();
        let share = hits as f64 / draws as f64;
        assert!((share - 0.75).abs() < 0.02, "share of x was {}", share);
    }
}
