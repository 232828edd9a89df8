use serde::{Deserialize, Serialize};

/// Nested team object on an upstream game. Only the abbreviation is used;
/// the API sends many more fields which serde ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTeam {
    pub abbreviation: String,
}

/// One unprocessed game as returned by the API, prior to filtering and
/// projection. A page fails to decode when any of these fields is missing,
/// which usually means an upstream schema change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGame {
    pub date: String,
    pub postseason: bool,
    pub home_team: ApiTeam,
    pub visitor_team: ApiTeam,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
}

/// Pagination metadata reported on every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub total_pages: u32,
}

/// JSON envelope of one API page: a slice of games plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<ApiGame>,
    pub meta: PageMeta,
}

/// One completed regular-season game, projected into the shape of a CSV row.
/// Field declaration order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: String,
    pub home_team: String,
    pub visitor_team: String,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
}

impl GameRecord {
    /// Projects a raw API game into a dataset record. The upstream date field
    /// sometimes carries a time component; only the first 10 characters
    /// (the ISO calendar date) are kept.
    pub fn from_api(game: ApiGame) -> Self {
        let date = match game.date.get(..10) {
            Some(prefix) => prefix.to_string(),
            None => game.date,
        };
        GameRecord {
            date,
            home_team: game.home_team.abbreviation,
            visitor_team: game.visitor_team.abbreviation,
            home_team_score: game.home_team_score,
            visitor_team_score: game.visitor_team_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_game(date: &str, postseason: bool) -> ApiGame {
        ApiGame {
            date: date.to_string(),
            postseason,
            home_team: ApiTeam {
                abbreviation: "BOS".to_string(),
            },
            visitor_team: ApiTeam {
                abbreviation: "LAL".to_string(),
            },
            home_team_score: 112,
            visitor_team_score: 99,
        }
    }

    #[test]
    fn test_from_api_truncates_datetime() {
        let record = GameRecord::from_api(raw_game("2024-01-15T00:00:00.000Z", false));
        assert_eq!(record.date, "2024-01-15");
        assert_eq!(record.home_team, "BOS");
        assert_eq!(record.visitor_team, "LAL");
        assert_eq!(record.home_team_score, 112);
        assert_eq!(record.visitor_team_score, 99);
    }

    #[test]
    fn test_from_api_keeps_plain_date() {
        let record = GameRecord::from_api(raw_game("2024-01-15", false));
        assert_eq!(record.date, "2024-01-15");
    }

    #[test]
    fn test_from_api_short_date_passes_through() {
        let record = GameRecord::from_api(raw_game("2024", false));
        assert_eq!(record.date, "2024");
    }

    #[test]
    fn test_envelope_deserializes_and_ignores_extra_fields() {
        let body = r#"{
            "data": [
                {
                    "id": 857603,
                    "date": "2024-01-15T00:00:00.000Z",
                    "postseason": false,
                    "season": 2023,
                    "status": "Final",
                    "home_team": {"id": 2, "abbreviation": "BOS", "city": "Boston"},
                    "visitor_team": {"id": 14, "abbreviation": "LAL", "city": "Los Angeles"},
                    "home_team_score": 112,
                    "visitor_team_score": 99
                }
            ],
            "meta": {"total_pages": 9, "current_page": 1, "per_page": 100}
        }"#;

        let envelope: PageEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.meta.total_pages, 9);
        assert_eq!(envelope.data[0].home_team.abbreviation, "BOS");
        assert!(!envelope.data[0].postseason);
    }

    #[test]
    fn test_envelope_missing_meta_is_an_error() {
        let body = r#"{"data": []}"#;
        assert!(serde_json::from_str::<PageEnvelope>(body).is_err());
    }

    #[test]
    fn test_envelope_missing_data_is_an_error() {
        let body = r#"{"meta": {"total_pages": 1}}"#;
        assert!(serde_json::from_str::<PageEnvelope>(body).is_err());
    }

    #[test]
    fn test_game_missing_score_is_an_error() {
        let body = r#"{
            "data": [
                {
                    "date": "2024-01-15",
                    "postseason": false,
                    "home_team": {"abbreviation": "BOS"},
                    "visitor_team": {"abbreviation": "LAL"},
                    "home_team_score": 112
                }
            ],
            "meta": {"total_pages": 1}
        }"#;
        assert!(serde_json::from_str::<PageEnvelope>(body).is_err());
    }
}
