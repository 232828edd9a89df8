//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default base URL for the games endpoint of the upstream API
pub const DEFAULT_API_BASE_URL: &str = "https://www.balldontlie.io/api/v1/games";

/// Number of games requested per API page
pub const API_PAGE_SIZE: u32 = 100;

/// Default season to refresh when none is configured
pub const DEFAULT_TARGET_SEASON: u32 = 2023;

/// Default directory the dataset CSV is written to
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "HOOPS_API_BASE_URL";

    /// Environment variable for target season override
    pub const SEASON: &str = "HOOPS_SEASON";

    /// Environment variable for data directory override
    pub const DATA_DIR: &str = "HOOPS_DATA_DIR";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "HOOPS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "HOOPS_HTTP_TIMEOUT";
}
