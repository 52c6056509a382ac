//! Top navigation bar shown on every authenticated page.

use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let user = session.user();
    let is_admin = user.as_ref().is_some_and(|u| u.is_admin);
    let name = user.map(|u| u.full_name).unwrap_or_default();

    let handle_logout = move |_| {
        let session = session.clone();
        spawn(async move {
            session.logout().await;
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        header {
            class: "header",
            div {
                class: "header__inner",
                div {
                    class: "header__brand",
                    Link { to: Route::Dashboard {}, "🏈 College Football Tracker" }
                }
                nav {
                    class: "header__nav",
                    Link { to: Route::Dashboard {}, class: "header__link", "Dashboard" }
                    Link { to: Route::Games {}, class: "header__link", "Games" }
                    Link { to: Route::MyGames {}, class: "header__link", "My Games" }
                    Link { to: Route::Statistics {}, class: "header__link", "Statistics" }
                    if is_admin {
                        Link { to: Route::Admin {}, class: "header__link", "Admin" }
                    }
                }
                div {
                    class: "header__user",
                    span { class: "header__name", "{name}" }
                    button {
                        class: "btn btn--secondary btn--sm",
                        r#type: "button",
                        onclick: handle_logout,
                        "Sign out"
                    }
                }
            }
        }
    }
}
