//! Research catalog: the three weighted label sets drawn for every event

use rand::Rng;

use crate::events::ResearchLookup;
use crate::generator::WeightedChoice;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::config::weights;
use crate::types::{CategoryLabel, GeneratorConfig, Indicator, Interval, MajorPair};

/// Weighted choice tables for currency pairs, indicators, and intervals
#[derive(Debug, Clone)]
pub struct ResearchCatalog {
    major_pairs: WeightedChoice<MajorPair>,
    indicators: WeightedChoice<Indicator>,
    intervals: WeightedChoice<Interval>,
}

impl ResearchCatalog {
    /// Build the catalog from explicit weight tables.
    ///
    /// `None` major pair weights select pairs uniformly.
    pub fn new(
        major_pair_weights: Option<&[u32]>,
        indicator_weights: &[u32],
        interval_weights: &[u32],
    ) -> SimulationResult<Self> {
        Ok(Self {
            major_pairs: build_table(major_pair_weights)?,
            indicators: build_table(Some(indicator_weights))?,
            intervals: build_table(Some(interval_weights))?,
        })
    }

    /// Catalog with the built-in weights: uniform pairs, MACD-leaning
    /// indicators, 5s-leaning intervals
    pub fn standard() -> SimulationResult<Self> {
        Self::new(None, &weights::INDICATOR, &weights::INTERVAL)
    }

    /// Build the catalog from a configuration
    pub fn from_config(config: &GeneratorConfig) -> SimulationResult<Self> {
        Self::new(
            config.major_pair_weights.as_deref(),
            &config.indicator_weights,
            &config.interval_weights,
        )
    }

    /// Draw one research lookup
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> ResearchLookup {
        ResearchLookup {
            major_pair: *self.major_pairs.sample(rng),
            indicator: *self.indicators.sample(rng),
            interval: *self.intervals.sample(rng),
        }
    }

    /// Currency pair table
    pub fn major_pairs(&self) -> &WeightedChoice<MajorPair> {
        &self.major_pairs
    }

    /// Indicator table
    pub fn indicators(&self) -> &WeightedChoice<Indicator> {
        &self.indicators
    }

    /// Interval table
    pub fn intervals(&self) -> &WeightedChoice<Interval> {
        &self.intervals
    }
}

fn build_table<L: CategoryLabel>(weights: Option<&[u32]>) -> SimulationResult<WeightedChoice<L>> {
    WeightedChoice::new(L::all().to_vec(), weights)
        .map_err(|source| SimulationError::WeightTable { category: L::CATEGORY, source })
}
