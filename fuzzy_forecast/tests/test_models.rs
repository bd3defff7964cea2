use assert_approx_eq::assert_approx_eq;
use fuzzy_forecast::data::TimeSeriesData;
use fuzzy_forecast::error::ForecastError;
use fuzzy_forecast::models::song_chissom::{song_chissom_forecast, SongChissom};
use fuzzy_forecast::models::{ForecastModel, ForecastResult, TrainedForecastModel};

fn oil_head() -> Vec<f64> {
    vec![47.12, 33.62, 41.6]
}

#[test]
fn test_reference_scenario() {
    let model = SongChissom::new(30.0, 100.0, 7).unwrap();
    let trained = model.train_values(&oil_head()).unwrap();

    assert_eq!(trained.fuzzified(), &[2, 1, 2]);
    assert_eq!(trained.groups().targets(2), Some(&[1][..]));
    assert_eq!(trained.groups().targets(1), Some(&[2][..]));

    let forecast = trained.predict_values(&oil_head()).unwrap();
    assert_eq!(forecast, vec![35.0, 45.0]);
}

#[test]
fn test_output_length() {
    let series = vec![47.12, 33.62, 41.6, 52.81, 50.17, 64.73];

    for steps in [0usize, 1, 4] {
        let forecast = song_chissom_forecast(&series, 30.0, 100.0, 7, steps).unwrap();
        assert_eq!(forecast.len(), series.len() - 1 + steps);
    }
}

#[test]
fn test_historical_forecasts_stay_inside_universe() {
    let series = vec![47.12, 33.62, 41.6, 52.81, 50.17, 64.73, 68.76, 53.79];
    let forecast = song_chissom_forecast(&series, 30.0, 100.0, 7, 0).unwrap();

    for value in forecast {
        assert!((30.0..=100.0).contains(&value));
    }
}

#[test]
fn test_determinism() {
    let series = vec![51.56, 40.27, 52.2, 73.95, 86.49, 93.75, 79.17];

    let first = song_chissom_forecast(&series, 30.0, 100.0, 7, 3).unwrap();
    let second = song_chissom_forecast(&series, 30.0, 100.0, 7, 3).unwrap();

    // Bit-identical, not just approximately equal
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_transitions_carry_weight() {
    // State 1 transitions twice to 2 and once to 3, so the forecast from
    // state 1 is (45 + 45 + 55) / 3 rather than the unweighted (45 + 55) / 2
    let series = vec![35.0, 45.0, 35.0, 45.0, 35.0, 55.0];
    let model = SongChissom::new(30.0, 100.0, 7).unwrap();
    let trained = model.train_values(&series).unwrap();

    assert_eq!(trained.groups().targets(1), Some(&[2, 2, 3][..]));

    let forecast = trained.predict_values(&series).unwrap();
    assert_approx_eq!(forecast[4], (45.0 + 45.0 + 55.0) / 3.0);
}

#[test]
fn test_self_fallback_for_terminal_state() {
    // 95.0 fuzzifies to set 7, which only occurs at the end of the series
    // and is never a transition source, so its own midpoint is the forecast
    let series = vec![35.0, 45.0, 95.0];
    let model = SongChissom::new(30.0, 100.0, 7).unwrap();
    let trained = model.train_values(&series).unwrap();

    let next = trained.forecast_values(1);
    assert_eq!(next, vec![95.0]);
}

#[test]
fn test_extrapolation_reaches_fixed_point() {
    // Every observation sits in set 2, so state 2's only target is itself
    // and extrapolation repeats the interval midpoint forever
    let series = vec![45.0, 46.0, 44.0];
    let model = SongChissom::new(30.0, 100.0, 7).unwrap();
    let trained = model.train_values(&series).unwrap();

    let values = trained.forecast_values(5);
    assert_eq!(values, vec![45.0; 5]);
}

#[test]
fn test_non_finite_observation_is_not_rejected() {
    // A placeholder row may carry NaN; fuzzification clamps it to the upper
    // boundary set instead of failing
    let series = vec![45.0, 55.0, f64::NAN];
    let model = SongChissom::new(30.0, 100.0, 7).unwrap();
    let trained = model.train_values(&series).unwrap();

    assert_eq!(trained.fuzzified(), &[2, 3, 7]);
}

#[test]
fn test_insufficient_data() {
    let result = song_chissom_forecast(&[50.0], 30.0, 100.0, 7, 0);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));

    let result = song_chissom_forecast(&[], 30.0, 100.0, 7, 0);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}

#[test]
fn test_invalid_universe() {
    let result = song_chissom_forecast(&[50.0, 60.0], 90.0, 80.0, 7, 0);
    assert!(matches!(result, Err(ForecastError::InvalidUniverse(_))));
}

#[test]
fn test_invalid_configuration() {
    let result = song_chissom_forecast(&[50.0, 60.0], 30.0, 100.0, 2, 0);
    assert!(matches!(result, Err(ForecastError::InvalidConfiguration(_))));
}

#[test]
fn test_model_trait_workflow() {
    let labels: Vec<String> = (1..=5).map(|i| format!("t{}", i)).collect();
    let values = vec![47.12, 33.62, 41.6, 52.81, 50.17];
    let data = TimeSeriesData::new(labels, values).unwrap();

    let model = SongChissom::with_universe(30.0, 100.0).unwrap();
    assert!(model.name().contains("Song-Chissom"));

    let trained = model.train(&data).unwrap();
    assert_eq!(trained.last_value(), 50.17);

    let predicted = trained.predict(&data).unwrap();
    assert_eq!(predicted.horizons(), data.len() - 1);

    let labels = predicted.labels().unwrap();
    assert_eq!(labels.len(), data.len() - 1);
    assert_eq!(labels[0], "t2");

    let future = trained.forecast(3).unwrap();
    assert_eq!(future.values().len(), 3);
    assert_eq!(future.horizons(), 3);
}

#[test]
fn test_forecast_result_operations() {
    let values = vec![35.0, 45.0, 45.0];
    let forecast = ForecastResult::new(values.clone(), 3).unwrap();

    assert_eq!(forecast.horizons(), 3);
    assert_eq!(forecast.values(), &values);

    let json = forecast.to_json().unwrap();
    assert!(json.contains("values"));

    let actual = vec![36.0, 44.0, 46.0];
    let error = forecast.mean_absolute_error(&actual).unwrap();
    assert_approx_eq!(error, 1.0);

    let error = forecast.mean_squared_error(&actual).unwrap();
    assert_approx_eq!(error, 1.0);
}

#[test]
fn test_forecast_result_length_validation() {
    let result = ForecastResult::new(vec![1.0, 2.0], 3);
    assert!(result.is_err());

    let forecast = ForecastResult::new(vec![1.0, 2.0], 2).unwrap();
    assert!(forecast.mean_absolute_error(&[1.0]).is_err());
}
