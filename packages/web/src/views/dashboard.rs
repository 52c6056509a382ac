//! Dashboard: headline attendance stats with top teams and recent seasons.

use dioxus::prelude::*;

use api::{ApiClient, AttendanceStats};
use ui::components::{Card, Loading, StatTile};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_context::<ApiClient>();
    let mut stats = use_signal(|| Option::<AttendanceStats>::None);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.attendance_stats().await {
                Ok(data) => stats.set(Some(data)),
                Err(err) => tracing::error!("failed to load stats: {err}"),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { Loading { message: "Loading your stats..." } };
    }

    let Some(stats) = stats() else {
        return rsx! {
            Card {
                p { "Failed to load statistics. Please try again later." }
            }
        };
    };

    let teams_count = stats.games_by_team.len();

    let mut top_teams: Vec<(String, u32)> = stats
        .games_by_team
        .iter()
        .map(|(team, count)| (team.clone(), *count))
        .collect();
    top_teams.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_teams.truncate(10);

    let mut recent_seasons: Vec<(i32, u32)> = stats
        .games_by_season
        .iter()
        .map(|(season, count)| (*season, *count))
        .collect();
    recent_seasons.sort_by(|a, b| b.0.cmp(&a.0));
    recent_seasons.truncate(5);

    rsx! {
        h1 { class: "page__title", "Dashboard" }

        div {
            class: "stat-grid",
            StatTile { value: stats.total_games, label: "Total Games" }
            StatTile { value: stats.unique_stadiums, label: "Stadiums" }
            StatTile { value: stats.unique_states, label: "States" }
            StatTile { value: teams_count as u32, label: "Teams" }
        }

        div {
            class: "dashboard__columns",
            Card {
                h2 { class: "card__heading", "Top Teams" }
                if top_teams.is_empty() {
                    p { class: "muted", "No games attended yet" }
                } else {
                    ul {
                        class: "tally-list",
                        for (team, count) in top_teams {
                            li {
                                key: "{team}",
                                class: "tally-list__row",
                                span { "{team}" }
                                span { class: "tally-list__count", "{count}" }
                            }
                        }
                    }
                }
                Link { to: Route::Statistics {}, class: "card__footer-link", "View all stats →" }
            }

            Card {
                h2 { class: "card__heading", "Recent Seasons" }
                if recent_seasons.is_empty() {
                    p { class: "muted", "No games attended yet" }
                } else {
                    ul {
                        class: "tally-list",
                        for (season, count) in recent_seasons {
                            li {
                                key: "{season}",
                                class: "tally-list__row",
                                span { "{season}" }
                                span { class: "tally-list__count", "{count} games" }
                            }
                        }
                    }
                }
            }
        }

        if stats.total_games == 0 {
            Card {
                class: "dashboard__empty",
                h3 { "Start tracking your games" }
                p { "Browse games and mark the ones you've attended to see your statistics here." }
                Link { to: Route::Games {}, class: "btn btn--primary", "Browse Games" }
            }
        }
    }
}
