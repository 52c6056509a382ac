//! Plain records mirrored from the backend's JSON responses. This client
//! does not own their canonical lifecycle; payload shape is trusted as
//! declared.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
    pub created_at: String,
}

/// Bearer token returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub school: String,
    pub mascot: Option<String>,
    pub abbreviation: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub classification: Option<String>,
    pub api_team_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub capacity: Option<i64>,
    pub api_venue_id: Option<i64>,
}

/// Full game record returned by `GET /games/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    /// ISO datetime string (UTC).
    pub start_date: String,
    pub season: i32,
    pub season_type: Option<String>,
    pub week: Option<i32>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub venue_id: Option<i64>,
    pub api_game_id: Option<i64>,
    pub home_team: Team,
    pub away_team: Team,
    pub venue: Option<Venue>,
    #[serde(default)]
    pub attendance: Option<i64>,
}

/// Trimmed game record used in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameListItem {
    pub id: i64,
    /// ISO datetime string (UTC).
    pub start_date: String,
    pub season: i32,
    pub season_type: Option<String>,
    pub week: Option<i32>,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub venue: Option<Venue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub season: i32,
    pub game_count: u32,
}

/// A user's claim of having attended a specific game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub user_id: i64,
    pub game_id: i64,
    pub notes: Option<String>,
    pub created_at: String,
    pub game: GameListItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub game_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub notes: Option<String>,
}

/// Aggregate counts for the dashboard and statistics pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total_games: u32,
    pub unique_stadiums: u32,
    pub unique_states: u32,
    pub games_by_team: HashMap<String, u32>,
    pub games_by_season: HashMap<i32, u32>,
    pub stadiums_visited: Vec<String>,
    pub states_visited: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkAttendanceItem {
    pub game_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkAttendanceRequest {
    pub games: Vec<BulkAttendanceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkAttendanceResponse {
    pub created: u32,
    pub skipped: u32,
    pub errors: Vec<String>,
}

/// Acknowledgement from the admin data-import trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshResult {
    pub message: String,
}

/// Options for game listing/counting. Absent values are omitted from the
/// query string; an empty team filter counts as absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameFilters {
    pub season: Option<i32>,
    pub team: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl GameFilters {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.count_query_pairs();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// The count endpoint only understands season and team.
    pub(crate) fn count_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(season) = self.season {
            pairs.push(("season", season.to_string()));
        }
        if let Some(team) = self.team.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("team", team.to_string()));
        }
        pairs
    }
}

/// Options for team listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamFilters {
    pub conference: Option<String>,
    pub search: Option<String>,
}

impl TeamFilters {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(conference) = self.conference.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("conference", conference.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_filters_omit_absent_values() {
        let filters = GameFilters {
            season: Some(2023),
            team: None,
            skip: None,
            limit: Some(100),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("season", "2023".to_string()),
                ("limit", "100".to_string())
            ]
        );
        assert!(GameFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn test_empty_team_filter_counts_as_absent() {
        let filters = GameFilters {
            team: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.query_pairs().is_empty());

        let filters = GameFilters {
            team: Some("Michigan".to_string()),
            skip: Some(50),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("team", "Michigan".to_string()),
                ("skip", "50".to_string())
            ]
        );
    }

    #[test]
    fn test_count_pairs_ignore_paging() {
        let filters = GameFilters {
            season: Some(2024),
            team: Some("Ohio State".to_string()),
            skip: Some(20),
            limit: Some(10),
        };
        assert_eq!(
            filters.count_query_pairs(),
            vec![
                ("season", "2024".to_string()),
                ("team", "Ohio State".to_string())
            ]
        );
    }

    #[test]
    fn test_stats_deserialize_with_numeric_season_keys() {
        let json = r#"{
            "total_games": 12,
            "unique_stadiums": 7,
            "unique_states": 5,
            "games_by_team": {"Michigan": 6, "Ohio State": 3},
            "games_by_season": {"2022": 4, "2023": 8},
            "stadiums_visited": ["Michigan Stadium"],
            "states_visited": ["MI", "OH"]
        }"#;
        let stats: AttendanceStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_games, 12);
        assert_eq!(stats.games_by_team.get("Michigan"), Some(&6));
        assert_eq!(stats.games_by_season.get(&2023), Some(&8));
    }

    #[test]
    fn test_attendance_create_skips_missing_notes() {
        let body = serde_json::to_string(&AttendanceCreate {
            game_id: 42,
            notes: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"game_id":42}"#);

        let body = serde_json::to_string(&AttendanceCreate {
            game_id: 42,
            notes: Some("Great game".to_string()),
        })
        .unwrap();
        assert_eq!(body, r#"{"game_id":42,"notes":"Great game"}"#);
    }

    #[test]
    fn test_attendance_update_always_sends_the_notes_field() {
        // The PATCH body carries notes explicitly, null included; the
        // backend treats null as "no change", not as a clear.
        let body = serde_json::to_string(&AttendanceUpdate { notes: None }).unwrap();
        assert_eq!(body, r#"{"notes":null}"#);
    }
}
