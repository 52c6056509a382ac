//! Full statistics breakdown: totals, per-team and per-season counts, and
//! the stadiums and states visited.

use dioxus::prelude::*;

use api::{ApiClient, AttendanceStats};
use ui::components::{Card, Loading, StatTile};

#[derive(Debug, Clone, Copy, PartialEq)]
enum TeamSort {
    Count,
    Name,
}

#[component]
pub fn Statistics() -> Element {
    let client = use_context::<ApiClient>();
    let mut stats = use_signal(|| Option::<AttendanceStats>::None);
    let mut loading = use_signal(|| true);
    let mut sort_by = use_signal(|| TeamSort::Count);

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
        return rsx! { Loading { message: "Loading statistics..." } };
    }

    let Some(stats) = stats() else {
        return rsx! {
            Card {
                p { "Failed to load statistics. Please try again later." }
            }
        };
    };

    let teams_count = stats.games_by_team.len();

    let mut sorted_teams: Vec<(String, u32)> = stats
        .games_by_team
        .iter()
        .map(|(team, count)| (team.clone(), *count))
        .collect();
    match sort_by() {
        TeamSort::Count => sorted_teams.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))),
        TeamSort::Name => sorted_teams.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    let mut sorted_seasons: Vec<(i32, u32)> = stats
        .games_by_season
        .iter()
        .map(|(season, count)| (*season, *count))
        .collect();
    sorted_seasons.sort_by(|a, b| b.0.cmp(&a.0));

    let mut stadiums = stats.stadiums_visited.clone();
    stadiums.sort();
    let mut states = stats.states_visited.clone();
    states.sort();

    rsx! {
        h1 { class: "page__title", "Statistics" }

        div {
            class: "stat-grid",
            StatTile { value: stats.total_games, label: "Total Games Attended" }
            StatTile { value: stats.unique_stadiums, label: "Unique Stadiums" }
            StatTile { value: stats.unique_states, label: "States Visited" }
            StatTile { value: teams_count as u32, label: "Different Teams" }
        }

        div {
            class: "stats__columns",
            Card {
                div {
                    class: "card__header",
                    h2 { class: "card__heading", "Games by Team" }
                    select {
                        class: "field__input field__input--compact",
                        onchange: move |evt| {
                            sort_by.set(match evt.value().as_str() {
                                "name" => TeamSort::Name,
                                _ => TeamSort::Count,
                            });
                        },
                        option { value: "count", "Sort by Count" }
                        option { value: "name", "Sort by Name" }
                    }
                }
                if sorted_teams.is_empty() {
                    p { class: "muted", "No games attended yet" }
                } else {
                    ul {
                        class: "tally-list tally-list--scroll",
                        for (team, count) in sorted_teams {
                            li {
                                key: "{team}",
                                class: "tally-list__row",
                                span { "{team}" }
                                span { class: "tally-list__count", "{count}" }
                            }
                        }
                    }
                }
            }

            Card {
                h2 { class: "card__heading", "Games by Season" }
                if sorted_seasons.is_empty() {
                    p { class: "muted", "No games attended yet" }
                } else {
                    ul {
                        class: "tally-list tally-list--scroll",
                        for (season, count) in sorted_seasons {
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

        div {
            class: "stats__columns",
            Card {
                h2 { class: "card__heading", "Stadiums Visited" }
                if stadiums.is_empty() {
                    p { class: "muted", "No stadiums visited yet" }
                } else {
                    ul {
                        class: "tally-list tally-list--scroll",
                        for stadium in stadiums {
                            li { key: "{stadium}", class: "tally-list__row", "{stadium}" }
                        }
                    }
                }
            }

            Card {
                h2 { class: "card__heading", "States Visited" }
                if states.is_empty() {
                    p { class: "muted", "No states visited yet" }
                } else {
                    ul {
                        class: "tally-list tally-list--scroll",
                        for state in states {
                            li { key: "{state}", class: "tally-list__row", "{state}" }
                        }
                    }
                }
            }
        }
    }
}
