//! The user's attended games, newest first, with inline note editing.

use dioxus::prelude::*;

use api::{ApiClient, Attendance, AttendanceUpdate};
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Card, Loading, Textarea};
use ui::flash;
use ui::format::{format_date_short, format_game_week, format_matchup, format_score};

use crate::confirm::confirm;
use crate::Route;

#[component]
pub fn MyGames() -> Element {
    let client = use_context::<ApiClient>();

    let mut records = use_signal(Vec::<Attendance>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut edit_notes = use_signal(String::new);

    let _loader = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                match client.list_attendance().await {
                    Ok(mut list) => {
                        // ISO datetimes order lexically.
                        list.sort_by(|a, b| b.game.start_date.cmp(&a.game.start_date));
                        records.set(list);
                    }
                    Err(err) => {
                        tracing::error!("failed to load attendance: {err}");
                        error.set(Some("Failed to load attended games".to_string()));
                    }
                }
                loading.set(false);
            }
        })
    };

    let delete_client = client.clone();
    let handle_delete = move |attendance_id: i64| {
        if !confirm("Are you sure you want to remove this game from your attended list?") {
            return;
        }
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_attendance(attendance_id).await {
                Ok(()) => {
                    records.write().retain(|a| a.id != attendance_id);
                    flash(success, "Game removed from attended list");
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to remove game")));
                }
            }
        });
    };

    let update_client = client.clone();
    let handle_update_notes = move |attendance_id: i64| {
        let client = update_client.clone();
        let trimmed = edit_notes().trim().to_string();
        let notes = (!trimmed.is_empty()).then_some(trimmed);
        spawn(async move {
            let body = AttendanceUpdate {
                notes: notes.clone(),
            };
            match client.update_attendance(attendance_id, &body).await {
                Ok(_) => {
                    if let Some(record) =
                        records.write().iter_mut().find(|a| a.id == attendance_id)
                    {
                        record.notes = notes;
                    }
                    editing_id.set(None);
                    edit_notes.set(String::new());
                    flash(success, "Notes updated");
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to update notes")));
                }
            }
        });
    };

    if loading() {
        return rsx! { Loading { message: "Loading your games..." } };
    }

    let count = records.read().len();

    rsx! {
        h1 { class: "page__title", "My Attended Games" }

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

        if count == 0 {
            Card {
                class: "empty-state",
                p { "You haven't marked any games as attended yet." }
                Link { to: Route::Games {}, "Browse games to get started" }
            }
        } else {
            p {
                class: "muted",
                if count == 1 { "1 game attended" } else { "{count} games attended" }
            }
            div {
                class: "game-list",
                for record in records() {
                    AttendedGame {
                        key: "{record.id}",
                        editing: editing_id() == Some(record.id),
                        edit_notes: edit_notes(),
                        on_edit_notes_change: move |value| edit_notes.set(value),
                        on_start_edit: move |(id, notes): (i64, String)| {
                            editing_id.set(Some(id));
                            edit_notes.set(notes);
                        },
                        on_cancel_edit: move |_| {
                            editing_id.set(None);
                            edit_notes.set(String::new());
                        },
                        on_save: handle_update_notes.clone(),
                        on_delete: handle_delete.clone(),
                        record,
                    }
                }
            }
        }
    }
}

#[component]
fn AttendedGame(
    record: Attendance,
    editing: bool,
    edit_notes: String,
    on_edit_notes_change: EventHandler<String>,
    on_start_edit: EventHandler<(i64, String)>,
    on_cancel_edit: EventHandler<()>,
    on_save: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let game = &record.game;
    let record_id = record.id;
    let notes_seed = record.notes.clone().unwrap_or_default();

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

                    if editing {
                        div {
                            class: "game-card__notes-form",
                            Textarea {
                                placeholder: "Add notes about this game...",
                                value: edit_notes,
                                oninput: move |evt: FormEvent| on_edit_notes_change.call(evt.value()),
                            }
                            div {
                                class: "game-card__notes-actions",
                                Button {
                                    small: true,
                                    onclick: move |_| on_save.call(record_id),
                                    "Save"
                                }
                                Button {
                                    small: true,
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| on_cancel_edit.call(()),
                                    "Cancel"
                                }
                            }
                        }
                    } else if let Some(notes) = &record.notes {
                        div {
                            class: "game-card__notes",
                            p { "{notes}" }
                        }
                    }
                }

                if !editing {
                    div {
                        class: "game-card__actions",
                        Button {
                            small: true,
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                on_start_edit.call((record_id, notes_seed.clone()))
                            },
                            if record.notes.is_some() { "Edit Notes" } else { "Add Notes" }
                        }
                        Button {
                            small: true,
                            variant: ButtonVariant::Danger,
                            onclick: move |_| on_delete.call(record_id),
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
