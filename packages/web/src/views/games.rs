//! Browse all games, filter by team and season, and toggle attendance.

use dioxus::prelude::*;
use futures::join;

use api::{ApiClient, AttendanceCreate, GameListItem, SeasonInfo, Team, TeamFilters};
use ui::components::{Alert, AlertKind, Card, Loading};
use ui::{flash, AttendanceIndex, GameCard, GameFilters};

#[component]
pub fn Games() -> Element {
    let client = use_context::<ApiClient>();

    let mut teams = use_signal(Vec::<Team>::new);
    let mut seasons = use_signal(Vec::<SeasonInfo>::new);
    let mut attendance = use_signal(AttendanceIndex::new);
    let mut games = use_signal(Vec::<GameListItem>::new);

    let mut selected_team = use_signal(String::new);
    let mut selected_season = use_signal(|| Option::<i32>::None);

    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    // Reference data and the user's attendance, fetched once.
    let reference = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                let team_filters = TeamFilters::default();
                let (teams_res, seasons_res, attendance_res) = join!(
                    client.list_teams(&team_filters),
                    client.seasons(),
                    client.list_attendance(),
                );
                match (teams_res, seasons_res, attendance_res) {
                    (Ok(team_list), Ok(season_list), Ok(records)) => {
                        teams.set(team_list);
                        seasons.set(newest_first(season_list));
                        attendance.set(AttendanceIndex::from_records(&records));
                    }
                    _ => error.set(Some("Failed to load data".to_string())),
                }
            }
        })
    };

    // Game list, re-fetched whenever a filter changes. An in-flight fetch
    // is dropped when the filters change again before it lands.
    let _games_loader = {
        let client = client.clone();
        use_resource(move || {
            let filters = api::GameFilters {
                season: selected_season(),
                team: Some(selected_team()).filter(|t| !t.is_empty()),
                skip: None,
                limit: Some(100),
            };
            let client = client.clone();
            async move {
                loading.set(true);
                match client.list_games(&filters).await {
                    Ok(list) => games.set(list),
                    Err(err) => {
                        tracing::error!("failed to load games: {err}");
                        error.set(Some("Failed to load games".to_string()));
                    }
                }
                loading.set(false);
            }
        })
    };

    let attend_client = client.clone();
    let handle_attend = move |(game_id, notes): (i64, Option<String>)| {
        let client = attend_client.clone();
        spawn(async move {
            let body = AttendanceCreate { game_id, notes };
            match client.create_attendance(&body).await {
                Ok(record) => {
                    attendance.write().insert(game_id, record.id);
                    flash(success, "Game marked as attended!");
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to mark game as attended")));
                }
            }
        });
    };

    let remove_client = client.clone();
    let handle_remove = move |game_id: i64| {
        // No record ID locally means nothing to delete server-side.
        let Some(attendance_id) = attendance.read().attendance_id(game_id) else {
            error.set(Some("Attendance record not found".to_string()));
            return;
        };
        let client = remove_client.clone();
        spawn(async move {
            match client.delete_attendance(attendance_id).await {
                Ok(()) => {
                    attendance.write().remove(game_id);
                    flash(success, "Attendance removed!");
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to remove attendance")));
                }
            }
        });
    };

    if reference.read().is_none() && error.read().is_none() {
        return rsx! { Loading { message: "Loading games..." } };
    }

    rsx! {
        h1 { class: "page__title", "Browse Games" }

        if let Some(message) = error() {
            Alert {
                kind: AlertKind::Error,
                message,
                on_close: move |_| error.set(None),
            }
        }
        if let Some(message) = success() {
            Alert {
                kind: AlertKind::Success,
                message,
                on_close: move |_| success.set(None),
            }
        }

        GameFilters {
            teams: teams(),
            seasons: seasons(),
            selected_team: selected_team(),
            selected_season: selected_season(),
            on_team_change: move |team| selected_team.set(team),
            on_season_change: move |season| selected_season.set(season),
            on_reset: move |_| {
                selected_team.set(String::new());
                selected_season.set(None);
            },
        }

        if loading() {
            Loading { message: "Loading games..." }
        } else if games.read().is_empty() {
            Card {
                class: "empty-state",
                p { "No games found. Try adjusting your filters." }
            }
        } else {
            p { class: "muted", "Showing {games.read().len()} games" }
            div {
                class: "game-list",
                for game in games() {
                    GameCard {
                        key: "{game.id}",
                        attended: attendance.read().contains(game.id),
                        game,
                        on_attend: handle_attend.clone(),
                        on_remove: handle_remove.clone(),
                    }
                }
            }
        }
    }
}

/// Season dropdown order: most recent season on top.
fn newest_first(mut seasons: Vec<SeasonInfo>) -> Vec<SeasonInfo> {
    seasons.sort_by(|a, b| b.season.cmp(&a.season));
    seasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasons_listed_newest_first() {
        let seasons = newest_first(vec![
            SeasonInfo { season: 2021, game_count: 812 },
            SeasonInfo { season: 2024, game_count: 743 },
            SeasonInfo { season: 2023, game_count: 901 },
        ]);
        let order: Vec<i32> = seasons.iter().map(|s| s.season).collect();
        assert_eq!(order, vec![2024, 2023, 2021]);
    }
}
