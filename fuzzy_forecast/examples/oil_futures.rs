use fuzzy_forecast::models::song_chissom::SongChissom;
use fuzzy_forecast::models::{ForecastModel, TrainedForecastModel};
use fuzzy_forecast::utils::{forecast_accuracy, future_labels};
use fuzzy_forecast::TimeSeriesData;

/// Semiannual Brent oil futures closes, July 2015 through January 2024
const OIL_FUTURES: &[(&str, f64)] = &[
    ("2015-07-01", 47.12),
    ("2016-01-01", 33.62),
    ("2016-07-01", 41.6),
    ("2017-01-01", 52.81),
    ("2017-07-01", 50.17),
    ("2018-01-01", 64.73),
    ("2018-07-01", 68.76),
    ("2019-01-01", 53.79),
    ("2019-07-01", 58.58),
    ("2020-01-01", 51.56),
    ("2020-07-01", 40.27),
    ("2021-01-01", 52.2),
    ("2021-07-01", 73.95),
    ("2022-01-01", 86.49),
    ("2022-07-01", 93.75),
    ("2023-01-01", 79.17),
    ("2023-07-01", 81.32),
    ("2024-01-01", 75.71),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Fuzzy Forecast: Oil Futures Example");
    println!("===================================\n");

    let labels: Vec<String> = OIL_FUTURES.iter().map(|(d, _)| d.to_string()).collect();
    let values: Vec<f64> = OIL_FUTURES.iter().map(|(_, v)| *v).collect();
    let data = TimeSeriesData::new(labels, values)?;

    // Universe of discourse [30, 100] split into 7 fuzzy sets
    let model = SongChissom::new(30.0, 100.0, 7)?;
    let trained = model.train(&data)?;

    let predicted = trained.predict(&data)?;
    let future = trained.forecast(1)?;

    // Combine the in-sample predictions with one extrapolated step and
    // attach them back to the dated series
    let mut forecast = predicted.values().to_vec();
    forecast.extend_from_slice(future.values());

    let last_label = OIL_FUTURES[OIL_FUTURES.len() - 1].0;
    let next_labels = future_labels(last_label, 1, "semiannual")?;
    let annotated = data.with_predictions(&forecast, &next_labels)?;

    println!("{:<12} {:>10} {:>10}", "date", "actual", "predicted");
    for point in annotated.points() {
        let actual = if point.actual.is_finite() {
            format!("{:.2}", point.actual)
        } else {
            "-".to_string()
        };
        let predicted = point
            .predicted
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());

        println!("{:<12} {:>10} {:>10}", point.label, actual, predicted);
    }

    let actual = &data.values()[1..];
    let accuracy = forecast_accuracy(predicted.values(), actual)?;
    println!("\n{}", accuracy);

    Ok(())
}
