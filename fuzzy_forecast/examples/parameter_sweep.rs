use fuzzy_forecast::song_chissom_forecast;
use fuzzy_forecast::utils::forecast_accuracy;

/// Semiannual Brent oil futures closes, July 2015 through January 2024
const OIL_PRICES: &[f64] = &[
    47.12, 33.62, 41.6, 52.81, 50.17, 64.73, 68.76, 53.79, 58.58, 51.56, 40.27, 52.2, 73.95,
    86.49, 93.75, 79.17, 81.32, 75.71,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Fuzzy Forecast: Parameter Sweep Example");
    println!("=======================================\n");

    // Each configuration runs as an independent pure invocation, so the
    // sweep needs no shared state between runs
    println!("{:>5} {:>10} {:>10}", "sets", "MAE", "RMSE");

    let mut best: Option<(usize, f64)> = None;
    for num_fuzzy_sets in 3..=15 {
        let forecast = song_chissom_forecast(OIL_PRICES, 30.0, 100.0, num_fuzzy_sets, 0)?;
        let accuracy = forecast_accuracy(&forecast, &OIL_PRICES[1..])?;

        println!(
            "{:>5} {:>10.4} {:>10.4}",
            num_fuzzy_sets, accuracy.mae, accuracy.rmse
        );

        if best.map_or(true, |(_, mae)| accuracy.mae < mae) {
            best = Some((num_fuzzy_sets, accuracy.mae));
        }
    }

    if let Some((sets, mae)) = best {
        println!("\nBest configuration: {} fuzzy sets (MAE {:.4})", sets, mae);
    }

    Ok(())
}
