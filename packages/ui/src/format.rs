//! Display formatting for dates, scores, and matchups. Kickoff times are
//! shown in US Central time (fixed UTC-6 offset).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Utc};

const CENTRAL_OFFSET_SECS: i32 = 6 * 3600;

fn parse_utc(iso: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(iso) {
        return Some(parsed.with_timezone(&Utc));
    }
    // The backend serializes naive UTC datetimes without an offset.
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn central(iso: &str) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::west_opt(CENTRAL_OFFSET_SECS)?;
    Some(parse_utc(iso)?.with_timezone(&offset))
}

/// "September 2, 2023". Unparseable input is shown as-is.
pub fn format_date(iso: &str) -> String {
    central(iso)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| iso.to_string())
}

/// "Sep 2, 2023".
pub fn format_date_short(iso: &str) -> String {
    central(iso)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| iso.to_string())
}

/// "Ohio State @ Michigan".
pub fn format_matchup(home_team: &str, away_team: &str) -> String {
    format!("{away_team} @ {home_team}")
}

/// "21-24", or "TBD" until both scores are in.
pub fn format_score(away_score: Option<i32>, home_score: Option<i32>) -> String {
    match (away_score, home_score) {
        (Some(away), Some(home)) => format!("{away}-{home}"),
        _ => "TBD".to_string(),
    }
}

/// The winning school, `Some("Tie")` on a tie, `None` until both scores
/// are in.
pub fn winner<'a>(
    home_team: &'a str,
    away_team: &'a str,
    home_score: Option<i32>,
    away_score: Option<i32>,
) -> Option<&'a str> {
    let (home, away) = (home_score?, away_score?);
    if home > away {
        Some(home_team)
    } else if away > home {
        Some(away_team)
    } else {
        Some("Tie")
    }
}

/// "Week 5", "Bowl Game" for postseason, "N/A" when the week is unknown.
pub fn format_game_week(week: Option<i32>, season_type: Option<&str>) -> String {
    if season_type == Some("postseason") {
        return "Bowl Game".to_string();
    }
    match week {
        Some(week) => format!("Week {week}"),
        None => "N/A".to_string(),
    }
}

/// The current calendar year, for season defaults and bounds.
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(21), Some(24)), "21-24");
        assert_eq!(format_score(None, Some(5)), "TBD");
        assert_eq!(format_score(Some(5), None), "TBD");
        assert_eq!(format_score(None, None), "TBD");
    }

    #[test]
    fn test_format_date_shifts_to_central() {
        assert_eq!(format_date("2023-09-02T19:30:00"), "September 2, 2023");
        assert_eq!(format_date_short("2023-09-02T19:30:00Z"), "Sep 2, 2023");
        // Early-UTC kickoffs fall on the previous Central day.
        assert_eq!(format_date("2024-01-01T01:00:00"), "December 31, 2023");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(format_date("TBA"), "TBA");
    }

    #[test]
    fn test_format_matchup() {
        assert_eq!(format_matchup("Michigan", "Ohio State"), "Ohio State @ Michigan");
    }

    #[test]
    fn test_winner() {
        assert_eq!(winner("Michigan", "Ohio State", Some(24), Some(21)), Some("Michigan"));
        assert_eq!(winner("Michigan", "Ohio State", Some(21), Some(24)), Some("Ohio State"));
        assert_eq!(winner("Michigan", "Ohio State", Some(21), Some(21)), Some("Tie"));
        assert_eq!(winner("Michigan", "Ohio State", None, Some(21)), None);
    }

    #[test]
    fn test_format_game_week() {
        assert_eq!(format_game_week(Some(5), Some("regular")), "Week 5");
        assert_eq!(format_game_week(Some(5), Some("postseason")), "Bowl Game");
        assert_eq!(format_game_week(None, Some("regular")), "N/A");
        assert_eq!(format_game_week(None, None), "N/A");
    }
}
