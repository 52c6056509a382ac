use dioxus::prelude::*;

use crate::components::Card;

/// One headline number with a label under it.
#[component]
pub fn StatTile(value: u32, label: String) -> Element {
    rsx! {
        Card {
            class: "stat-tile",
            div { class: "stat-tile__value", "{value}" }
            div { class: "stat-tile__label", "{label}" }
        }
    }
}
