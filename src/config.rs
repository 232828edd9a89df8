use crate::constants::{
    self, DEFAULT_DATA_DIR, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_TARGET_SEASON, env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the upstream games endpoint. Should include the https:// prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Season whose dataset is refreshed on each run.
    #[serde(default = "default_season")]
    pub season: u32,
    /// Directory the dataset CSV is written into.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_season() -> u32 {
    DEFAULT_TARGET_SEASON
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            season: default_season(),
            data_dir: default_data_dir(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, compiled defaults are used so the tool
    /// stays usable in scripts and CI without a setup step.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `HOOPS_API_BASE_URL` - Override API base URL
    /// - `HOOPS_SEASON` - Override target season
    /// - `HOOPS_DATA_DIR` - Override output directory
    /// - `HOOPS_LOG_FILE` - Override log file path
    /// - `HOOPS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            config.api_base_url = api_base_url;
        }

        if let Some(season) = std::env::var(env_vars::SEASON)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            config.season = season;
        }

        if let Ok(data_dir) = std::env::var(env_vars::DATA_DIR) {
            config.data_dir = data_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "API base URL must start with http:// or https://, got: {}",
                self.api_base_url
            )));
        }

        if self.data_dir.trim().is_empty() {
            return Err(AppError::config_error("Data directory must not be empty"));
        }

        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "HTTP timeout must be greater than zero seconds",
            ));
        }

        Ok(())
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves current configuration to the given path.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        let path = Path::new(config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not present, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("Target Season:");
        println!("{}", config.season);
        println!("────────────────────────────────────");
        println!("Data Directory:");
        println!("{}", config.data_dir);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/hoops_dataset.log");
            println!("(Default location)");
        }

        Ok(())
    }
}

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("hoops_dataset")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("hoops_dataset")
        .join("logs")
        .to_string_lossy()
        .to_string()
}
