use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Admin, Dashboard, Games, Login, MyGames, Register, Statistics};

mod confirm;
mod guard;
mod header;
mod views;

use guard::Protected;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/")]
        Dashboard {},
        #[route("/games")]
        Games {},
        #[route("/my-games")]
        MyGames {},
        #[route("/statistics")]
        Statistics {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Unknown paths fall back to the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("unknown path /{}", segments.join("/"));
    nav.replace(Route::Dashboard {});
    rsx! {}
}
