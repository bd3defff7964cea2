//! Universe of discourse partitioning and fuzzification

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// A fuzzy interval covering one segment of the universe of discourse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyInterval {
    /// Interval id, starting at 1
    pub id: usize,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Midpoint, used as the defuzzified value of this state
    pub mid: f64,
}

/// Equal-width partition of the universe of discourse into fuzzy intervals
#[derive(Debug, Clone, PartialEq)]
pub struct UniversePartition {
    /// Intervals in ascending id order
    intervals: Vec<FuzzyInterval>,
    /// Lower bound of the universe
    universe_min: f64,
    /// Upper bound of the universe
    universe_max: f64,
}

impl UniversePartition {
    /// Partition `[universe_min, universe_max]` into `num_fuzzy_sets`
    /// contiguous equal-width intervals with ids `1..=num_fuzzy_sets`.
    ///
    /// Bounds are derived arithmetically from the interval width, so
    /// `interval[i].max` and `interval[i + 1].min` are the same value.
    pub fn new(universe_min: f64, universe_max: f64, num_fuzzy_sets: usize) -> Result<Self> {
        if universe_min >= universe_max {
            return Err(ForecastError::InvalidUniverse(format!(
                "universe_min ({}) must be less than universe_max ({})",
                universe_min, universe_max
            )));
        }

        if num_fuzzy_sets < 3 {
            return Err(ForecastError::InvalidConfiguration(format!(
                "Number of fuzzy sets must be at least 3, got {}",
                num_fuzzy_sets
            )));
        }

        let width = (universe_max - universe_min) / num_fuzzy_sets as f64;
        let intervals = (0..num_fuzzy_sets)
            .map(|i| FuzzyInterval {
                id: i + 1,
                min: universe_min + i as f64 * width,
                max: universe_min + (i + 1) as f64 * width,
                mid: universe_min + (i as f64 + 0.5) * width,
            })
            .collect();

        Ok(Self {
            intervals,
            universe_min,
            universe_max,
        })
    }

    /// Map a value to the id of the covering interval.
    ///
    /// The scan runs in ascending id order, so a value sitting exactly on a
    /// shared boundary resolves to the lower-indexed interval. Values outside
    /// the universe clamp to the nearest boundary set; this is a total
    /// function over all inputs and never fails.
    pub fn fuzzify(&self, value: f64) -> usize {
        for interval in &self.intervals {
            if value >= interval.min && value <= interval.max {
                return interval.id;
            }
        }

        if value < self.universe_min {
            1
        } else {
            self.intervals.len()
        }
    }

    /// Get the intervals in ascending id order
    pub fn intervals(&self) -> &[FuzzyInterval] {
        &self.intervals
    }

    /// Get the interval with the given id
    pub fn interval(&self, id: usize) -> Option<&FuzzyInterval> {
        self.intervals.get(id.checked_sub(1)?)
    }

    /// Midpoint of the interval with the given id.
    ///
    /// Ids produced by `fuzzify` are always valid indices into the table.
    pub(crate) fn mid_of(&self, id: usize) -> f64 {
        self.intervals[id - 1].mid
    }

    /// Number of fuzzy sets in the partition
    pub fn num_fuzzy_sets(&self) -> usize {
        self.intervals.len()
    }

    /// Lower bound of the universe of discourse
    pub fn universe_min(&self) -> f64 {
        self.universe_min
    }

    /// Upper bound of the universe of discourse
    pub fn universe_max(&self) -> f64 {
        self.universe_max
    }
}
