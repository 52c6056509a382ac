//! Admin dashboard: season data import and user role management.
//!
//! The server is the authority on admin access; this page is only reachable
//! through the admin route guard.

use dioxus::prelude::*;

use api::{ApiClient, User};
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Card, Loading};
use ui::flash;
use ui::format::current_year;

use crate::confirm::confirm;

const MIN_IMPORT_SEASON: i32 = 1990;

#[component]
pub fn Admin() -> Element {
    let client = use_context::<ApiClient>();

    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut refresh_season = use_signal(current_year);
    let mut refreshing = use_signal(|| false);

    let max_season = current_year() + 1;

    let _loader = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                match client.list_users().await {
                    Ok(mut list) => {
                        list.sort_by(|a, b| a.email.cmp(&b.email));
                        users.set(list);
                    }
                    Err(err) => {
                        tracing::error!("failed to load users: {err}");
                        error.set(Some("Failed to load users".to_string()));
                    }
                }
                loading.set(false);
            }
        })
    };

    let promote_client = client.clone();
    let handle_promote = move |user_id: i64| {
        let client = promote_client.clone();
        spawn(async move {
            match client.promote_user(user_id).await {
                Ok(updated) => {
                    if let Some(user) = users.write().iter_mut().find(|u| u.id == user_id) {
                        *user = updated;
                    }
                    flash(success, "User promoted to admin");
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to promote user")));
                }
            }
        });
    };

    let demote_client = client.clone();
    let handle_demote = move |user_id: i64| {
        let client = demote_client.clone();
        spawn(async move {
            match client.demote_user(user_id).await {
                Ok(updated) => {
                    if let Some(user) = users.write().iter_mut().find(|u| u.id == user_id) {
                        *user = updated;
                    }
                    flash(success, "User demoted from admin");
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to demote user")));
                }
            }
        });
    };

    let refresh_client = client.clone();
    let handle_refresh = move |_| {
        let season = refresh_season().clamp(MIN_IMPORT_SEASON, max_season);
        if !confirm(&format!(
            "This will import all games for the {season} season. This may take a while. Continue?"
        )) {
            return;
        }
        let client = refresh_client.clone();
        refreshing.set(true);
        error.set(None);
        spawn(async move {
            match client.refresh_data(season).await {
                Ok(_) => {
                    flash(success, format!("Successfully imported {season} season data"));
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Failed to refresh data")));
                }
            }
            refreshing.set(false);
        });
    };

    if loading() {
        return rsx! { Loading { message: "Loading admin panel..." } };
    }

    let total_users = users.read().len();
    let admin_users = users.read().iter().filter(|u| u.is_admin).count();
    let regular_users = total_users - admin_users;

    rsx! {
        h1 { class: "page__title", "Admin Dashboard" }

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

        div {
            class: "admin__columns",
            Card {
                h2 { class: "card__heading", "Data Management" }
                p { class: "muted", "Import game data from CollegeFootballData.com" }

                div {
                    class: "field",
                    label { class: "field__label", "Season Year" }
                    input {
                        class: "field__input",
                        r#type: "number",
                        min: "{MIN_IMPORT_SEASON}",
                        max: "{max_season}",
                        value: "{refresh_season}",
                        oninput: move |evt| {
                            if let Ok(season) = evt.value().parse() {
                                refresh_season.set(season);
                            }
                        },
                    }
                }

                Button {
                    class: "btn--block",
                    disabled: refreshing(),
                    onclick: handle_refresh,
                    if refreshing() { "Importing Data..." } else { "Import Season Data" }
                }

                p {
                    class: "muted muted--small",
                    "All FBS games for the selected season are imported. Existing games are skipped."
                }
            }

            Card {
                h2 { class: "card__heading", "System Statistics" }
                ul {
                    class: "tally-list",
                    li {
                        class: "tally-list__row",
                        span { "Total Users" }
                        span { class: "tally-list__count", "{total_users}" }
                    }
                    li {
                        class: "tally-list__row",
                        span { "Admin Users" }
                        span { class: "tally-list__count", "{admin_users}" }
                    }
                    li {
                        class: "tally-list__row",
                        span { "Regular Users" }
                        span { class: "tally-list__count", "{regular_users}" }
                    }
                }
            }
        }

        Card {
            h2 { class: "card__heading", "User Management" }
            table {
                class: "user-table",
                thead {
                    tr {
                        th { "Email" }
                        th { "Name" }
                        th { "Role" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in users() {
                        tr {
                            key: "{user.id}",
                            td { "{user.email}" }
                            td { "{user.full_name}" }
                            td {
                                if user.is_admin {
                                    span { class: "badge badge--admin", "Admin" }
                                } else {
                                    span { class: "badge", "User" }
                                }
                            }
                            td {
                                if user.is_admin {
                                    Button {
                                        small: true,
                                        variant: ButtonVariant::Secondary,
                                        onclick: {
                                            let mut handle_demote = handle_demote.clone();
                                            move |_| handle_demote(user.id)
                                        },
                                        "Demote"
                                    }
                                } else {
                                    Button {
                                        small: true,
                                        onclick: {
                                            let mut handle_promote = handle_promote.clone();
                                            move |_| handle_promote(user.id)
                                        },
                                        "Promote to Admin"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
