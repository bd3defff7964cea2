//! Song-Chissom fuzzy time series forecasting
//!
//! Song, Q., & Chissom, B. S. (1993). Fuzzy time series and its models.
//! Fuzzy Sets and Systems, 54(3), 269-277.

use crate::data::TimeSeriesData;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use crate::partition::UniversePartition;
use crate::relations::{build_relationships, FlrGroups};

/// Number of fuzzy sets used when a caller does not pick one
pub const DEFAULT_NUM_FUZZY_SETS: usize = 7;

/// Song-Chissom fuzzy time series model
#[derive(Debug, Clone)]
pub struct SongChissom {
    /// Name of the model
    name: String,
    /// Lower bound of the universe of discourse
    universe_min: f64,
    /// Upper bound of the universe of discourse
    universe_max: f64,
    /// Number of fuzzy sets partitioning the universe
    num_fuzzy_sets: usize,
}

/// Trained Song-Chissom model
#[derive(Debug, Clone)]
pub struct TrainedSongChissom {
    /// Name of the model
    name: String,
    /// Partition of the universe of discourse
    partition: UniversePartition,
    /// Fuzzified historical series
    fuzzified: Vec<usize>,
    /// Transitions grouped by source state
    groups: FlrGroups,
    /// Last historical observation
    last_value: f64,
}

impl SongChissom {
    /// Create a new Song-Chissom model.
    ///
    /// Fails with `InvalidUniverse` when the bounds are not ordered and with
    /// `InvalidConfiguration` when fewer than 3 fuzzy sets are requested, so
    /// a bad configuration never reaches training.
    pub fn new(universe_min: f64, universe_max: f64, num_fuzzy_sets: usize) -> Result<Self> {
        UniversePartition::new(universe_min, universe_max, num_fuzzy_sets)?;

        Ok(Self {
            name: format!("Song-Chissom (sets={})", num_fuzzy_sets),
            universe_min,
            universe_max,
            num_fuzzy_sets,
        })
    }

    /// Create a model over the given universe with the default of seven
    /// fuzzy sets
    pub fn with_universe(universe_min: f64, universe_max: f64) -> Result<Self> {
        Self::new(universe_min, universe_max, DEFAULT_NUM_FUZZY_SETS)
    }

    /// Train directly on a slice of observations.
    ///
    /// Builds the partition, the fuzzified sequence and the transition
    /// groups fresh for this invocation; nothing is shared between calls.
    pub fn train_values(&self, values: &[f64]) -> Result<TrainedSongChissom> {
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData(format!(
                "At least 2 observations are required, got {}",
                values.len()
            )));
        }

        let partition =
            UniversePartition::new(self.universe_min, self.universe_max, self.num_fuzzy_sets)?;

        let fuzzified: Vec<usize> = values.iter().map(|&v| partition.fuzzify(v)).collect();
        let flrs = build_relationships(&fuzzified);
        let groups = FlrGroups::from_relationships(&flrs);

        Ok(TrainedSongChissom {
            name: self.name.clone(),
            partition,
            fuzzified,
            groups,
            last_value: values[values.len() - 1],
        })
    }
}

impl ForecastModel for SongChissom {
    type Trained = TrainedSongChissom;

    fn train(&self, data: &TimeSeriesData) -> Result<Self::Trained> {
        self.train_values(&data.values())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedSongChissom {
    /// Defuzzify one state: the mean of the target interval midpoints, with
    /// duplicate targets weighted by their occurrence count. A state never
    /// observed as a transition source falls back to its own midpoint.
    fn defuzzify(&self, state: usize) -> f64 {
        match self.groups.targets(state) {
            Some(targets) if !targets.is_empty() => {
                let sum: f64 = targets.iter().map(|&id| self.partition.mid_of(id)).sum();
                sum / targets.len() as f64
            }
            _ => self.partition.mid_of(state),
        }
    }

    /// One-step-ahead forecasts for a historical series.
    ///
    /// `forecasts[i - 1]` predicts `values[i]` from the fuzzy state of
    /// `values[i - 1]`; the output is one shorter than the input. The series
    /// is re-fuzzified with the trained partition, so this reproduces the
    /// training-time forecasts when called on the training series.
    pub fn predict_values(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData(format!(
                "At least 2 observations are required, got {}",
                values.len()
            )));
        }

        let fuzzified: Vec<usize> = values.iter().map(|&v| self.partition.fuzzify(v)).collect();

        Ok((1..values.len())
            .map(|i| self.defuzzify(fuzzified[i - 1]))
            .collect())
    }

    /// Extrapolate beyond the last observation.
    ///
    /// Each predicted value is fed back through the fuzzifier to become the
    /// next state, while the transition groups stay frozen at what the
    /// historical data produced. Repeated steps may settle into a cycle or a
    /// fixed point once a state repeats.
    pub fn forecast_values(&self, horizons: usize) -> Vec<f64> {
        let mut values = Vec::with_capacity(horizons);
        let mut current_set = self.partition.fuzzify(self.last_value);

        for _ in 0..horizons {
            let next_value = self.defuzzify(current_set);
            values.push(next_value);
            current_set = self.partition.fuzzify(next_value);
        }

        values
    }

    /// Fuzzified historical series the model was trained on
    pub fn fuzzified(&self) -> &[usize] {
        &self.fuzzified
    }

    /// Transitions grouped by source state
    pub fn groups(&self) -> &FlrGroups {
        &self.groups
    }

    /// Partition of the universe of discourse
    pub fn partition(&self) -> &UniversePartition {
        &self.partition
    }

    /// Last historical observation seen during training
    pub fn last_value(&self) -> f64 {
        self.last_value
    }
}

impl TrainedForecastModel for TrainedSongChissom {
    fn forecast(&self, horizons: usize) -> Result<ForecastResult> {
        ForecastResult::new(self.forecast_values(horizons), horizons)
    }

    fn predict(&self, data: &TimeSeriesData) -> Result<ForecastResult> {
        let values = self.predict_values(&data.values())?;
        let labels = data.labels()[1..].to_vec();
        let horizons = values.len();

        ForecastResult::new_with_labels(values, horizons, labels)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Run the full Song-Chissom pipeline over a historical series.
///
/// Returns one prediction per historical step after the first, followed by
/// `forecast_steps` extrapolated values, so the output length is
/// `historical.len() - 1 + forecast_steps`. The computation is pure: two
/// calls with identical inputs produce identical output.
pub fn song_chissom_forecast(
    historical: &[f64],
    universe_min: f64,
    universe_max: f64,
    num_fuzzy_sets: usize,
    forecast_steps: usize,
) -> Result<Vec<f64>> {
    let model = SongChissom::new(universe_min, universe_max, num_fuzzy_sets)?;
    let trained = model.train_values(historical)?;

    let mut forecast = trained.predict_values(historical)?;
    forecast.extend(trained.forecast_values(forecast_steps));

    Ok(forecast)
}
