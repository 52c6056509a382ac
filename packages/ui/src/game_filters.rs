//! Team/season filter bar for the games page.

use dioxus::prelude::*;

use api::{SeasonInfo, Team};

/// Filter controls: a client-side team search narrowing the team select,
/// a season select, and a reset link shown once any filter is active.
#[component]
pub fn GameFilters(
    teams: Vec<Team>,
    seasons: Vec<SeasonInfo>,
    selected_team: String,
    selected_season: Option<i32>,
    on_team_change: EventHandler<String>,
    on_season_change: EventHandler<Option<i32>>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut search_term = use_signal(String::new);

    let term = search_term().to_lowercase();
    let filtered_teams: Vec<&Team> = teams
        .iter()
        .filter(|team| term.is_empty() || team.school.to_lowercase().contains(&term))
        .collect();

    let has_filters = !selected_team.is_empty() || selected_season.is_some();
    let season_value = selected_season.map(|s| s.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "filters",
            div {
                class: "filters__grid",
                div {
                    class: "field",
                    label { class: "field__label", "Search Team" }
                    input {
                        class: "field__input",
                        r#type: "text",
                        placeholder: "Type to search...",
                        value: search_term(),
                        oninput: move |evt| search_term.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    label { class: "field__label", "Team" }
                    select {
                        class: "field__input",
                        value: "{selected_team}",
                        onchange: move |evt| on_team_change.call(evt.value()),
                        option { value: "", "All Teams" }
                        for team in filtered_teams {
                            option {
                                key: "{team.id}",
                                value: "{team.school}",
                                "{team.school}"
                            }
                        }
                    }
                }

                div {
                    class: "field",
                    label { class: "field__label", "Season" }
                    select {
                        class: "field__input",
                        value: "{season_value}",
                        onchange: move |evt| on_season_change.call(evt.value().parse().ok()),
                        option { value: "", "All Seasons" }
                        for season in &seasons {
                            option {
                                key: "{season.season}",
                                value: "{season.season}",
                                "{season.season} ({season.game_count} games)"
                            }
                        }
                    }
                }
            }

            if has_filters {
                button {
                    class: "filters__reset",
                    r#type: "button",
                    onclick: move |_| on_reset.call(()),
                    "Clear all filters"
                }
            }
        }
    }
}
