use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    label: Option<String>,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label {
                label { class: "field__label", "{label}" }
            }
            input {
                class: "field__input {class}",
                r#type,
                placeholder: "{placeholder}",
                value: "{value}",
                required,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = 3)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: "field__input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows: "{rows}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
