use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}
