use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Danger => "btn btn--danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let size_class = if small { " btn--sm" } else { "" };

    rsx! {
        button {
            class: "{variant.class()}{size_class} {class}",
            r#type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
