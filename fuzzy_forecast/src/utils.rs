//! Utility functions for the fuzzy_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Days, Months, NaiveDate};

/// Split time series data into training and test sets
pub fn train_test_split(data: &[f64], test_ratio: f64) -> (Vec<f64>, Vec<f64>) {
    if data.is_empty() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (data.to_vec(), Vec::new());
    }

    let test_size = (data.len() as f64 * test_ratio).round() as usize;
    let train_size = data.len() - test_size;

    let train = data[..train_size].to_vec();
    let test = data[train_size..].to_vec();

    (train, test)
}

/// Create future ISO-8601 date labels following the last one
pub fn future_labels(last_label: &str, horizon: usize, frequency: &str) -> Result<Vec<String>> {
    let last = NaiveDate::parse_from_str(last_label, "%Y-%m-%d").map_err(|e| {
        ForecastError::DataError(format!("Invalid date label '{}': {}", last_label, e))
    })?;

    let mut labels = Vec::with_capacity(horizon);
    let mut current = last;

    for _ in 0..horizon {
        current = match frequency {
            "daily" | "d" | "1d" => current + Days::new(1),
            "weekly" | "w" | "1w" => current + Days::new(7),
            "monthly" | "m" | "1m" => current + Months::new(1),
            "semiannual" | "6m" => current + Months::new(6),
            _ => {
                return Err(ForecastError::DataError(format!(
                    "Unsupported frequency: {}",
                    frequency
                )))
            }
        };
        labels.push(current.format("%Y-%m-%d").to_string());
    }

    Ok(labels)
}

/// Calculate accuracy metrics for a forecast vs actual values.
///
/// Pairs where either side is non-finite (e.g. a NaN placeholder row) are
/// skipped before any statistic is computed.
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::DataError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let pairs: Vec<(f64, f64)> = forecast
        .iter()
        .zip(actual.iter())
        .filter(|(f, a)| f.is_finite() && a.is_finite())
        .map(|(&f, &a)| (f, a))
        .collect();

    if pairs.is_empty() {
        return Err(ForecastError::DataError(
            "No finite forecast/actual pairs to score".to_string(),
        ));
    }

    let n = pairs.len() as f64;

    // Calculate errors
    let errors: Vec<f64> = pairs.iter().map(|(f, a)| a - f).collect();

    // Mean Absolute Error
    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;

    // Mean Squared Error
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;

    // Root Mean Squared Error
    let rmse = mse.sqrt();

    // Mean Absolute Percentage Error
    let mape = pairs
        .iter()
        .zip(errors.iter())
        .filter(|((_, a), _)| *a != 0.0)
        .map(|((_, a), e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    // Symmetric Mean Absolute Percentage Error
    let smape = pairs
        .iter()
        .map(|(f, a)| {
            let abs_a = a.abs();
            let abs_f = f.abs();
            if abs_a + abs_f == 0.0 {
                0.0
            } else {
                200.0 * (a - f).abs() / (abs_a + abs_f)
            }
        })
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
        smape,
    })
}

/// Derive a universe of discourse from observed values.
///
/// Scans the finite values for their range and pads both ends by
/// `margin_ratio` of the observed span, leaving headroom for values the
/// future series may reach.
pub fn universe_bounds(values: &[f64], margin_ratio: f64) -> Result<(f64, f64)> {
    if margin_ratio < 0.0 {
        return Err(ForecastError::DataError(
            "Margin ratio must be non-negative".to_string(),
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        if value.is_finite() {
            min = min.min(value);
            max = max.max(value);
        }
    }

    if min > max {
        return Err(ForecastError::DataError(
            "No finite values to derive universe bounds from".to_string(),
        ));
    }
    if min == max {
        return Err(ForecastError::InvalidUniverse(
            "All observations are identical, the universe would be empty".to_string(),
        ));
    }

    let margin = (max - min) * margin_ratio;
    Ok((min - margin, max + margin))
}

/// Forecast accuracy metrics
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        writeln!(f, "  SMAPE: {:.4}%", self.smape)?;
        Ok(())
    }
}
