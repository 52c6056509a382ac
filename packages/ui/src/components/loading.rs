use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "loading__spinner" }
            p { class: "loading__message", "{message}" }
        }
    }
}
