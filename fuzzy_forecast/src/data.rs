//! Time series data handling for forecasting

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single labeled observation.
///
/// The label is an opaque position marker (typically an ISO-8601 date); the
/// forecasting engine never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Position label
    pub label: String,
    /// Observed value
    pub actual: f64,
    /// One-step-ahead prediction for this position, once a model has run
    pub predicted: Option<f64>,
}

/// Time series data structure for forecasting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    /// Observations in chronological order
    points: Vec<SeriesPoint>,
}

/// Data loader for time series data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load time series data from a CSV file.
    ///
    /// The header row is scanned for the label column (`date`, `time` or
    /// `label`) and the value column (`actual`, `close`, `price` or
    /// `value`).
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<TimeSeriesData> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let label_idx = Self::detect_column(&headers, &["date", "time", "label"]).ok_or_else(
            || ForecastError::DataError("No label column found in data".to_string()),
        )?;
        let value_idx = Self::detect_column(&headers, &["actual", "close", "price", "value"])
            .ok_or_else(|| ForecastError::DataError("No value column found in data".to_string()))?;

        let mut points = Vec::new();
        for record in reader.records() {
            let record = record?;

            let label = record
                .get(label_idx)
                .ok_or_else(|| ForecastError::DataError("Missing label field".to_string()))?
                .to_string();
            let raw_value = record
                .get(value_idx)
                .ok_or_else(|| ForecastError::DataError("Missing value field".to_string()))?;
            let actual = raw_value.trim().parse::<f64>().map_err(|e| {
                ForecastError::DataError(format!("Invalid value '{}': {}", raw_value, e))
            })?;

            points.push(SeriesPoint {
                label,
                actual,
                predicted: None,
            });
        }

        Ok(TimeSeriesData { points })
    }

    /// Find the first header matching one of the candidate names
    fn detect_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
        for candidate in candidates {
            for (idx, header) in headers.iter().enumerate() {
                if header.to_lowercase().contains(candidate) {
                    return Some(idx);
                }
            }
        }

        None
    }
}

impl TimeSeriesData {
    /// Create a new TimeSeriesData from labels and values
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Labels length ({}) doesn't match values length ({})",
                labels.len(),
                values.len()
            )));
        }

        let points = labels
            .into_iter()
            .zip(values)
            .map(|(label, actual)| SeriesPoint {
                label,
                actual,
                predicted: None,
            })
            .collect();

        Ok(Self { points })
    }

    /// Create a new TimeSeriesData from existing points
    pub fn from_points(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    /// Create a new TimeSeriesData from bare values, labeled by position
    pub fn from_values(values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &actual)| SeriesPoint {
                label: (i + 1).to_string(),
                actual,
                predicted: None,
            })
            .collect();

        Self { points }
    }

    /// Get the observations
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Get the observed values as a vector
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.actual).collect()
    }

    /// Get the position labels as a vector
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    /// Check if the time series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the length of the time series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Calculate the mean of the observed values.
    ///
    /// Non-finite observations (e.g. a NaN placeholder row) are skipped.
    pub fn mean(&self) -> Result<f64> {
        let finite: Vec<f64> = self
            .points
            .iter()
            .map(|p| p.actual)
            .filter(|v| v.is_finite())
            .collect();

        if finite.is_empty() {
            return Err(ForecastError::DataError(
                "No finite values available".to_string(),
            ));
        }

        let sum: f64 = finite.iter().sum();
        Ok(sum / finite.len() as f64)
    }

    /// Calculate the standard deviation of the observed values.
    ///
    /// Non-finite observations are skipped, like in `mean`.
    pub fn std_dev(&self) -> Result<f64> {
        let finite: Vec<f64> = self
            .points
            .iter()
            .map(|p| p.actual)
            .filter(|v| v.is_finite())
            .collect();

        if finite.is_empty() {
            return Err(ForecastError::DataError(
                "No finite values available".to_string(),
            ));
        }

        let mean = finite.iter().sum::<f64>() / finite.len() as f64;
        let variance: f64 = finite
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / finite.len() as f64;

        Ok(variance.sqrt())
    }

    /// Attach a forecast sequence to the series.
    ///
    /// The first point carries no prediction; point `i` receives
    /// `forecast[i - 1]`. Forecast entries beyond the observed series become
    /// appended future rows with the supplied labels and a NaN placeholder
    /// for the (unknown) actual value.
    pub fn with_predictions(&self, forecast: &[f64], future_labels: &[String]) -> Result<Self> {
        let hist_steps = self.points.len().saturating_sub(1);
        if forecast.len() < hist_steps {
            return Err(ForecastError::DataError(format!(
                "Forecast length ({}) doesn't cover the {} historical steps",
                forecast.len(),
                hist_steps
            )));
        }

        let future = &forecast[hist_steps..];
        if future.len() > future_labels.len() {
            return Err(ForecastError::DataError(format!(
                "Forecast has {} future steps but only {} future labels were given",
                future.len(),
                future_labels.len()
            )));
        }

        let mut points = self.points.clone();
        for i in 1..points.len() {
            points[i].predicted = Some(forecast[i - 1]);
        }

        for (label, &predicted) in future_labels.iter().zip(future) {
            points.push(SeriesPoint {
                label: label.clone(),
                actual: f64::NAN,
                predicted: Some(predicted),
            });
        }

        Ok(Self { points })
    }
}
