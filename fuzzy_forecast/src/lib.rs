//! # Fuzzy Forecast
//!
//! A Rust library for fuzzy time series forecasting using the Song-Chissom
//! method.
//!
//! ## Features
//!
//! - Equal-width partitioning of a universe of discourse into fuzzy intervals
//! - Fuzzification of observations into interval ids
//! - Fuzzy logical relationships and their grouping by source state
//! - One-step-ahead forecasts for a historical series
//! - Optional extrapolation beyond the observed data
//! - CSV ingestion, labeled series handling and forecast accuracy metrics
//!
//! ## Quick Start
//!
//! ```rust
//! use fuzzy_forecast::song_chissom_forecast;
//!
//! let series = vec![47.12, 33.62, 41.6, 52.81, 50.17];
//! let forecast = song_chissom_forecast(&series, 30.0, 100.0, 7, 1).unwrap();
//!
//! // One prediction per historical step after the first, plus one
//! // extrapolated step beyond the series.
//! assert_eq!(forecast.len(), series.len() - 1 + 1);
//! ```

pub mod data;
pub mod error;
pub mod models;
pub mod partition;
pub mod relations;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{DataLoader, SeriesPoint, TimeSeriesData};
pub use crate::error::ForecastError;
pub use crate::models::song_chissom::{song_chissom_forecast, SongChissom, TrainedSongChissom};
pub use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
pub use crate::partition::{FuzzyInterval, UniversePartition};
pub use crate::relations::{Flr, FlrGroups};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
