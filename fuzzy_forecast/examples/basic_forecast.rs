use fuzzy_forecast::models::song_chissom::SongChissom;
use fuzzy_forecast::models::{ForecastModel, TrainedForecastModel};
use fuzzy_forecast::utils::{forecast_accuracy, universe_bounds};
use fuzzy_forecast::TimeSeriesData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Fuzzy Forecast: Basic Forecasting Example");
    println!("=========================================\n");

    // Create sample data
    println!("Creating sample data...");
    let data = create_sample_data();
    println!("Sample data created: {} points\n", data.len());

    // Derive a universe of discourse with 10% headroom on both ends
    let (universe_min, universe_max) = universe_bounds(&data.values(), 0.1)?;
    println!(
        "Universe of discourse: [{:.2}, {:.2}]",
        universe_min, universe_max
    );

    // Train the model
    let model = SongChissom::new(universe_min, universe_max, 7)?;
    let trained = model.train(&data)?;
    println!("Model trained: {}\n", trained.name());

    // One-step predictions for the observed series
    let predicted = trained.predict(&data)?;
    println!("One-step predictions (last 6 of {}):", predicted.horizons());
    let labels = predicted.labels().unwrap();
    let tail = predicted.values().len().saturating_sub(6);
    for (label, value) in labels[tail..].iter().zip(&predicted.values()[tail..]) {
        println!("  {}: {:.2}", label, value);
    }

    // In-sample accuracy
    let actual = &data.values()[1..];
    let accuracy = forecast_accuracy(predicted.values(), actual)?;
    println!("\n{}", accuracy);

    // Extrapolate beyond the observed series
    let future = trained.forecast(5)?;
    println!("Extrapolated values (5 steps): {:?}", future.values());

    println!("\nForecasting complete!");

    Ok(())
}

/// Create sample data with a trend and some seasonality
fn create_sample_data() -> TimeSeriesData {
    let mut labels = Vec::with_capacity(48);
    let mut values = Vec::with_capacity(48);

    // Four years of monthly observations with a mild upward trend
    let mut value = 100.0;
    for i in 0..48 {
        labels.push(format!("{}-{:02}-01", 2020 + i / 12, i % 12 + 1));

        let seasonality = (i as f64 * std::f64::consts::PI / 6.0).sin() * 2.0;
        let noise = (i as f64 * 0.7).sin() * 1.5;

        value = value + 0.4 + seasonality + noise;
        values.push(value);
    }

    TimeSeriesData::new(labels, values).unwrap()
}
