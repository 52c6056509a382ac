use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert--error",
            AlertKind::Success => "alert alert--success",
        }
    }
}

/// Dismissible page-level notification. Every failure in this client ends
/// up here; nothing is fatal.
#[component]
pub fn Alert(kind: AlertKind, message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "{kind.class()}",
            span { class: "alert__message", "{message}" }
            button {
                class: "alert__close",
                r#type: "button",
                onclick: move |_| on_close.call(()),
                "✕"
            }
        }
    }
}
