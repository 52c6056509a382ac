//! One game in a browse list, with the attend / remove controls.

use dioxus::prelude::*;

use api::GameListItem;

use crate::components::{Button, ButtonVariant, Card};
use crate::format::{format_date_short, format_game_week, format_matchup, format_score};

/// A single game row. Marking attended opens an inline optional-notes
/// input first; the parent owns the actual API calls and list state.
#[component]
pub fn GameCard(
    game: GameListItem,
    #[props(default)] attended: bool,
    on_attend: EventHandler<(i64, Option<String>)>,
    on_remove: EventHandler<i64>,
) -> Element {
    let mut show_notes_input = use_signal(|| false);
    let mut notes = use_signal(String::new);

    let game_id = game.id;
    let handle_save = move |_| {
        let trimmed = notes().trim().to_string();
        let notes_body = (!trimmed.is_empty()).then_some(trimmed);
        on_attend.call((game_id, notes_body));
        show_notes_input.set(false);
        notes.set(String::new());
    };

    rsx! {
        Card {
            class: "game-card",
            div {
                class: "game-card__body",
                div {
                    class: "game-card__info",
                    div {
                        class: "game-card__meta",
                        "{format_date_short(&game.start_date)} • {format_game_week(game.week, game.season_type.as_deref())}"
                    }
                    div {
                        class: "game-card__matchup",
                        "{format_matchup(&game.home_team.school, &game.away_team.school)}"
                    }
                    div {
                        class: "game-card__score",
                        span { class: "game-card__score-label", "Score: " }
                        "{format_score(game.away_score, game.home_score)}"
                    }
                    if let Some(venue) = &game.venue {
                        div {
                            class: "game-card__venue",
                            "📍 {venue.name}"
                            if let (Some(city), Some(state)) = (&venue.city, &venue.state) {
                                span { " • {city}, {state}" }
                            }
                        }
                    }
                }

                div {
                    class: "game-card__actions",
                    if !attended {
                        if !show_notes_input() {
                            Button {
                                small: true,
                                onclick: move |_| show_notes_input.set(true),
                                "Mark Attended"
                            }
                        } else {
                            div {
                                class: "game-card__notes-form",
                                input {
                                    class: "field__input",
                                    r#type: "text",
                                    placeholder: "Add notes (optional)",
                                    value: notes(),
                                    oninput: move |evt| notes.set(evt.value()),
                                }
                                div {
                                    class: "game-card__notes-actions",
                                    Button { small: true, onclick: handle_save, "Save" }
                                    Button {
                                        small: true,
                                        variant: ButtonVariant::Secondary,
                                        onclick: move |_| {
                                            show_notes_input.set(false);
                                            notes.set(String::new());
                                        },
                                        "Cancel"
                                    }
                                }
                            }
                        }
                    } else {
                        span { class: "game-card__attended", "✓ Attended" }
                        Button {
                            small: true,
                            variant: ButtonVariant::Danger,
                            onclick: move |_| on_remove.call(game_id),
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
