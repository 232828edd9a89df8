//! NBA Regular-Season Dataset Refresher Library
//!
//! This library downloads a season's regular-season game results from the
//! balldontlie API, filters out postseason and not-yet-completed games, and
//! writes them as a sorted CSV dataset.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hoops_dataset::config::Config;
//! use hoops_dataset::data_fetcher::create_http_client_with_timeout;
//! use hoops_dataset::error::AppError;
//! use hoops_dataset::pipeline::refresh_dataset;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let rows = refresh_dataset(&client, &config, today).await?;
//!     println!("wrote {rows} rows");
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{ApiGame, GameRecord, PageEnvelope};
pub use data_fetcher::{SeasonPages, create_http_client_with_timeout};
pub use error::AppError;
pub use pipeline::{dataset_path, refresh_dataset};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
