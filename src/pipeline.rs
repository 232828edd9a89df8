//! The download-filter-sort-write pipeline

use chrono::NaiveDate;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::data_fetcher::SeasonPages;
use crate::data_fetcher::models::GameRecord;
use crate::error::AppError;

/// Destination path of the season dataset inside the data directory.
pub fn dataset_path(data_dir: &str, season: u32) -> PathBuf {
    Path::new(data_dir).join(format!("games_{season}.csv"))
}

/// Keeps only games played strictly before `today`. Games dated today or
/// later are likely unfinished or unscheduled and are excluded. A date that
/// does not parse as an ISO calendar date aborts the run; it would mean the
/// upstream format changed under us.
pub fn filter_completed(
    records: Vec<GameRecord>,
    today: NaiveDate,
) -> Result<Vec<GameRecord>, AppError> {
    let mut retained = Vec::with_capacity(records.len());
    for record in records {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|e| {
            AppError::date_parse_error(format!("Invalid game date '{}': {e}", record.date))
        })?;
        if date < today {
            retained.push(record);
        } else {
            debug!(
                "Excluding {} vs {} on {}: not completed before {}",
                record.home_team, record.visitor_team, record.date, today
            );
        }
    }
    Ok(retained)
}

/// Runs the full refresh for the configured season: downloads every page,
/// drops postseason and not-yet-completed games, sorts by date and writes
/// the CSV. Returns the number of rows written.
///
/// When no games survive filtering the run fails with `EmptyDataset` and the
/// destination path is not touched; an existing dataset file stays as it was.
#[instrument(skip(client, config))]
pub async fn refresh_dataset(
    client: &Client,
    config: &Config,
    today: NaiveDate,
) -> Result<usize, AppError> {
    let season = config.season;
    info!("Refreshing dataset for season {}", season);

    let mut pages = SeasonPages::new(client, config, season);
    let fetched = pages.collect_remaining().await?;
    info!("Downloaded {} regular-season games", fetched.len());

    let mut retained = filter_completed(fetched, today)?;

    // Lexicographic order on ISO dates is chronological; sort_by is stable,
    // so games on the same date keep their fetch order
    retained.sort_by(|a, b| a.date.cmp(&b.date));

    if retained.is_empty() {
        return Err(AppError::empty_dataset(season));
    }

    let path = dataset_path(&config.data_dir, season);
    write_csv(&path, &retained)?;

    info!(
        "Finished refreshing {} season dataset: {} rows written to {}",
        season,
        retained.len(),
        path.display()
    );
    Ok(retained.len())
}

/// Writes header and rows to a sibling temp file, then swaps it in, so a
/// failed run never leaves a truncated dataset behind.
fn write_csv(path: &Path, records: &[GameRecord]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("csv.tmp");
    let mut writer = csv::Writer::from_path(&tmp_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, home: &str, visitor: &str) -> GameRecord {
        GameRecord {
            date: date.to_string(),
            home_team: home.to_string(),
            visitor_team: visitor.to_string(),
            home_team_score: 100,
            visitor_team_score: 90,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_dataset_path() {
        let path = dataset_path("data", 2023);
        assert_eq!(path, PathBuf::from("data/games_2023.csv"));
    }

    #[test]
    fn test_filter_completed_excludes_today_and_future() {
        let today = day("2024-01-15");
        let records = vec![
            record("2024-01-14", "BOS", "NYK"),
            record("2024-01-15", "MIA", "ORL"),
            record("2024-01-16", "DEN", "UTA"),
        ];

        let retained = filter_completed(records, today).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].date, "2024-01-14");
    }

    #[test]
    fn test_filter_completed_keeps_all_past_games() {
        let today = day("2024-06-01");
        let records = vec![
            record("2024-01-14", "BOS", "NYK"),
            record("2023-11-02", "MIA", "ORL"),
        ];

        let retained = filter_completed(records, today).unwrap();
        assert_eq!(retained.len(), 2);
    }

    #[test]
    fn test_filter_completed_rejects_unparseable_date() {
        let today = day("2024-01-15");
        let records = vec![record("01/14/2024", "BOS", "NYK")];

        let result = filter_completed(records, today);
        assert!(matches!(result, Err(AppError::DateParse(_))));
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut records = vec![
            record("2023-03-01", "AAA", "BBB"),
            record("2023-01-10", "CCC", "DDD"),
            record("2023-02-15", "EEE", "FFF"),
            record("2023-01-10", "GGG", "HHH"),
        ];
        records.sort_by(|a, b| a.date.cmp(&b.date));

        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2023-01-10", "2023-01-10", "2023-02-15", "2023-03-01"]
        );
        // Same-date games keep their original relative order
        assert_eq!(records[0].home_team, "CCC");
        assert_eq!(records[1].home_team, "GGG");
    }

    #[test]
    fn test_write_csv_emits_fixed_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games_2023.csv");
        let records = vec![
            record("2023-01-10", "BOS", "NYK"),
            record("2023-02-15", "MIA", "ORL"),
        ];

        write_csv(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,home_team,visitor_team,home_team_score,visitor_team_score"
        );
        assert_eq!(lines.next().unwrap(), "2023-01-10,BOS,NYK,100,90");
        assert_eq!(lines.next().unwrap(), "2023-02-15,MIA,ORL,100,90");
        assert!(lines.next().is_none());

        // The temp file was renamed away
        assert!(!dir.path().join("games_2023.csv.tmp").exists());
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games_2023.csv");
        fs::write(&path, "stale contents\n").unwrap();

        write_csv(&path, &[record("2023-01-10", "BOS", "NYK")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("date,home_team"));
        assert!(!content.contains("stale"));
    }
}
