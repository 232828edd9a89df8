use chrono::{Local, NaiveDate};
use clap::Parser;

use hoops_dataset::cli::Args;
use hoops_dataset::config::Config;
use hoops_dataset::data_fetcher::create_http_client_with_timeout;
use hoops_dataset::error::AppError;
use hoops_dataset::{logging, pipeline};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations short-circuit before any network work
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if let Some(new_base_url) = args.set_api_base_url {
        let mut config = Config::load().await.unwrap_or_default();
        config.api_base_url = new_base_url;
        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let mut config = Config::load().await?;
    if let Some(season) = args.season {
        config.season = season;
    }
    if let Some(output_dir) = args.output_dir {
        config.data_dir = output_dir;
    }

    let today = match &args.date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            AppError::date_parse_error(format!("Invalid --date value '{date}': {e}"))
        })?,
        None => Local::now().date_naive(),
    };

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let rows = pipeline::refresh_dataset(&client, &config, today).await?;
    tracing::info!("Dataset refresh complete: {rows} rows");

    Ok(())
}
