use assert_approx_eq::assert_approx_eq;
use fuzzy_forecast::error::ForecastError;
use fuzzy_forecast::utils::{forecast_accuracy, future_labels, train_test_split, universe_bounds};
use rstest::rstest;

#[test]
fn test_train_test_split() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    let (train, test) = train_test_split(&data, 0.4);
    assert_eq!(train, vec![1.0, 2.0, 3.0]);
    assert_eq!(test, vec![4.0, 5.0]);
}

#[test]
fn test_train_test_split_degenerate_ratio() {
    let data = vec![1.0, 2.0, 3.0];

    let (train, test) = train_test_split(&data, 0.0);
    assert_eq!(train.len(), 3);
    assert!(test.is_empty());

    let (train, test) = train_test_split(&data, 1.0);
    assert_eq!(train.len(), 3);
    assert!(test.is_empty());
}

#[rstest]
#[case("daily", "2024-01-02")]
#[case("weekly", "2024-01-08")]
#[case("monthly", "2024-02-01")]
#[case("semiannual", "2024-07-01")]
fn test_future_labels_frequencies(#[case] frequency: &str, #[case] expected: &str) {
    let labels = future_labels("2024-01-01", 1, frequency).unwrap();
    assert_eq!(labels, vec![expected]);
}

#[test]
fn test_future_labels_semiannual_rollover() {
    let labels = future_labels("2023-07-01", 2, "semiannual").unwrap();
    assert_eq!(labels, vec!["2024-01-01", "2024-07-01"]);
}

#[test]
fn test_future_labels_unsupported_frequency() {
    let result = future_labels("2024-01-01", 1, "fortnightly");
    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_future_labels_bad_date() {
    let result = future_labels("January 1st", 1, "daily");
    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_forecast_accuracy() {
    let forecast = vec![35.0, 45.0];
    let actual = vec![33.62, 41.6];

    let accuracy = forecast_accuracy(&forecast, &actual).unwrap();

    assert_approx_eq!(accuracy.mae, 2.39);
    assert_approx_eq!(accuracy.mse, (1.38_f64.powi(2) + 3.4_f64.powi(2)) / 2.0);
    assert_approx_eq!(accuracy.rmse, accuracy.mse.sqrt());
    assert!(accuracy.mape > 0.0);
    assert!(accuracy.smape > 0.0);
}

#[test]
fn test_forecast_accuracy_skips_non_finite_pairs() {
    let padded = forecast_accuracy(&[35.0, 45.0, 45.0], &[33.62, 41.6, f64::NAN]).unwrap();
    let strict = forecast_accuracy(&[35.0, 45.0], &[33.62, 41.6]).unwrap();

    assert_approx_eq!(padded.mae, strict.mae);
    assert_approx_eq!(padded.rmse, strict.rmse);
}

#[test]
fn test_forecast_accuracy_no_finite_pairs() {
    let result = forecast_accuracy(&[f64::NAN], &[1.0]);
    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_forecast_accuracy_length_mismatch() {
    let result = forecast_accuracy(&[1.0], &[1.0, 2.0]);
    assert!(result.is_err());

    let result = forecast_accuracy(&[], &[]);
    assert!(result.is_err());
}

#[test]
fn test_accuracy_display() {
    let accuracy = forecast_accuracy(&[35.0, 45.0], &[33.62, 41.6]).unwrap();
    let text = format!("{}", accuracy);

    assert!(text.contains("MAE"));
    assert!(text.contains("RMSE"));
    assert!(text.contains("SMAPE"));
}

#[test]
fn test_universe_bounds() {
    let values = vec![40.0, 60.0, f64::NAN, 50.0];
    let (min, max) = universe_bounds(&values, 0.5).unwrap();

    assert_approx_eq!(min, 30.0);
    assert_approx_eq!(max, 70.0);
}

#[test]
fn test_universe_bounds_no_margin() {
    let (min, max) = universe_bounds(&[10.0, 20.0], 0.0).unwrap();

    assert_eq!(min, 10.0);
    assert_eq!(max, 20.0);
}

#[test]
fn test_universe_bounds_degenerate() {
    assert!(universe_bounds(&[], 0.1).is_err());
    assert!(universe_bounds(&[f64::NAN], 0.1).is_err());
    assert!(universe_bounds(&[1.0, 2.0], -0.1).is_err());

    let result = universe_bounds(&[5.0, 5.0], 0.1);
    assert!(matches!(result, Err(ForecastError::InvalidUniverse(_))));
}
