//! Fetching and projection of upstream game data

pub mod api;
pub mod models;

pub use api::{SeasonPages, build_games_url, create_http_client_with_timeout, fetch_page};
pub use models::{ApiGame, ApiTeam, GameRecord, PageEnvelope, PageMeta};
