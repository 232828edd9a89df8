//! HTTP access to the upstream games API and the page cursor

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::{API_PAGE_SIZE, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::data_fetcher::models::{GameRecord, PageEnvelope};
use crate::error::AppError;

/// Creates a configured HTTP client with connection pooling and a request
/// timeout. One client is shared across all page fetches of a run.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with the default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

/// Builds the games URL for one page of one season.
///
/// # Example
/// ```
/// use hoops_dataset::data_fetcher::api::build_games_url;
///
/// let url = build_games_url("https://api.example.com/games", 2023, 2);
/// assert_eq!(url, "https://api.example.com/games?seasons[]=2023&page=2&per_page=100");
/// ```
pub fn build_games_url(base_url: &str, season: u32, page: u32) -> String {
    format!("{base_url}?seasons[]={season}&page={page}&per_page={API_PAGE_SIZE}")
}

/// Generic fetch: one GET, status mapped to a specific error variant, body
/// decoded as JSON with shape diagnostics. Failures are not retried; any
/// non-2xx response or undecodable body aborts the run.
#[instrument(skip(client))]
pub(crate) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    debug!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            // Distinguish malformed JSON from valid JSON with the wrong shape
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches one page of games for a season.
#[instrument(skip(client, config))]
pub async fn fetch_page(
    client: &Client,
    config: &Config,
    season: u32,
    page: u32,
) -> Result<PageEnvelope, AppError> {
    let url = build_games_url(&config.api_base_url, season, page);
    fetch::<PageEnvelope>(client, &url).await
}

/// Single-pass cursor over all pages of a season.
///
/// Starts at page 1 assuming one page, re-reads `total_pages` from each
/// fetched page's metadata (the most recently observed value bounds the
/// loop), and yields one batch of projected records per page, in page order.
/// Postseason games are dropped during projection. The cursor is not
/// restartable; pages beyond the last drained batch are never fetched.
pub struct SeasonPages<'a> {
    client: &'a Client,
    config: &'a Config,
    season: u32,
    next_page: u32,
    total_pages: u32,
}

impl<'a> SeasonPages<'a> {
    pub fn new(client: &'a Client, config: &'a Config, season: u32) -> Self {
        SeasonPages {
            client,
            config,
            season,
            next_page: 1,
            total_pages: 1,
        }
    }

    /// Fetches the next page and returns its non-postseason games, or
    /// `Ok(None)` once the page counter has passed the reported total.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<GameRecord>>, AppError> {
        if self.next_page > self.total_pages {
            return Ok(None);
        }

        let page = self.next_page;
        let envelope = fetch_page(self.client, self.config, self.season, page).await?;

        self.total_pages = envelope.meta.total_pages;
        self.next_page += 1;
        info!("Fetched page {} of {}", page, self.total_pages);

        let mut records = Vec::with_capacity(envelope.data.len());
        for game in envelope.data {
            if game.postseason {
                debug!(
                    "Skipping {} vs {} on {} because postseason=true",
                    game.home_team.abbreviation, game.visitor_team.abbreviation, game.date
                );
                continue;
            }
            records.push(GameRecord::from_api(game));
        }

        Ok(Some(records))
    }

    /// Drains the cursor, returning every remaining record in page order.
    pub async fn collect_remaining(&mut self) -> Result<Vec<GameRecord>, AppError> {
        let mut records = Vec::new();
        while let Some(batch) = self.next_batch().await? {
            records.extend(batch);
        }
        Ok(records)
    }
}
