//! Local index over the user's attendance records.
//!
//! Pages keep this beside the game list so toggling is O(1) without
//! re-fetching attendance after every mutation. It is a derived view of the
//! records last fetched or mutated in this session — eventually consistent
//! only within the session; concurrent sessions can diverge until the next
//! full fetch.

use std::collections::{HashMap, HashSet};

use api::Attendance;

/// Attended-game-ID set plus a game-ID → attendance-ID map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceIndex {
    attended: HashSet<i64>,
    by_game: HashMap<i64, i64>,
}

impl AttendanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[Attendance]) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record.game_id, record.id);
        }
        index
    }

    pub fn contains(&self, game_id: i64) -> bool {
        self.attended.contains(&game_id)
    }

    /// The attendance record ID for a game, if one is known locally.
    /// `None` means a delete must not be issued for this game.
    pub fn attendance_id(&self, game_id: i64) -> Option<i64> {
        self.by_game.get(&game_id).copied()
    }

    pub fn insert(&mut self, game_id: i64, attendance_id: i64) {
        self.attended.insert(game_id);
        self.by_game.insert(game_id, attendance_id);
    }

    /// Drop a game from both the set and the map, returning the attendance
    /// ID that was mapped to it.
    pub fn remove(&mut self, game_id: i64) -> Option<i64> {
        self.attended.remove(&game_id);
        self.by_game.remove(&game_id)
    }

    pub fn len(&self) -> usize {
        self.attended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attended.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_then_remove_restores_previous_contents() {
        let mut index = AttendanceIndex::new();
        index.insert(10, 100);

        let before = index.clone();
        index.insert(11, 101);
        assert!(index.contains(11));
        assert_eq!(index.attendance_id(11), Some(101));

        assert_eq!(index.remove(11), Some(101));
        assert_eq!(index, before);
        assert_eq!(index.attendance_id(11), None);
    }

    #[test]
    fn test_remove_unknown_game_reports_missing() {
        let mut index = AttendanceIndex::new();
        index.insert(10, 100);

        assert_eq!(index.remove(99), None);
        // Unrelated entries are untouched.
        assert!(index.contains(10));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_built_from_fetched_records() {
        let game = api::GameListItem {
            id: 10,
            start_date: "2023-09-02T19:30:00".to_string(),
            season: 2023,
            season_type: Some("regular".to_string()),
            week: Some(1),
            home_team: sample_team(1, "Michigan"),
            away_team: sample_team(2, "Ohio State"),
            home_score: Some(24),
            away_score: Some(21),
            venue: None,
        };
        let records = vec![api::Attendance {
            id: 100,
            user_id: 7,
            game_id: 10,
            notes: None,
            created_at: "2023-09-03T00:00:00".to_string(),
            game,
        }];

        let index = AttendanceIndex::from_records(&records);
        assert!(index.contains(10));
        assert_eq!(index.attendance_id(10), Some(100));
        assert!(!index.contains(11));
    }

    fn sample_team(id: i64, school: &str) -> api::Team {
        api::Team {
            id,
            school: school.to_string(),
            mascot: None,
            abbreviation: None,
            conference: None,
            division: None,
            classification: None,
            api_team_id: None,
        }
    }
}
