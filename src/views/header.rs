use crate::theme::theme_definition;
use crate::types::{ModelId, ThemeMode};
use dioxus::prelude::*;

#[component]
pub fn ChatHeader(
    sidebar_open: Signal<bool>,
    selected_model: Signal<ModelId>,
    theme: Signal<ThemeMode>,
) -> Element {
    let mut sidebar_open = sidebar_open;
    let mut theme = theme;
    let definition = theme_definition(theme());

    rsx! {
        header { class: "header",
            div { class: "header-brand",
                button {
                    class: "icon-btn menu-toggle",
                    r#type: "button",
                    title: "Toggle chat history",
                    onclick: move |_| sidebar_open.set(!sidebar_open()),
                    "\u{2630}"
                }
                div { class: "brand-mark", "M" }
                div {
                    h1 { class: "brand-title", "Mentify-AI" }
                    p { class: "brand-tagline", "Best Buddy's" }
                }
            }
            ModelSelector { selected_model }
            div { class: "header-actions",
                button {
                    class: "icon-btn",
                    r#type: "button",
                    title: definition.toggle_label,
                    onclick: move |_| theme.set(theme().toggled()),
                    "{definition.toggle_icon}"
                }
                ProfileMenu {}
            }
        }
    }
}

#[component]
fn ModelSelector(selected_model: Signal<ModelId>) -> Element {
    let mut selected_model = selected_model;
    let current = selected_model();

    rsx! {
        select {
            class: "model-select",
            value: current.value(),
            onchange: move |ev: FormEvent| selected_model.set(ModelId::from_value(&ev.value())),
            for model in ModelId::ALL {
                option {
                    key: "{model.value()}",
                    value: model.value(),
                    selected: model == current,
                    "{model.label()}"
                }
            }
        }
    }
}

/// Account menu. The entries are placeholders with no handlers.
#[component]
fn ProfileMenu() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "icon-btn",
            r#type: "button",
            title: "Account",
            onclick: move |_| open.set(!open()),
            "\u{1F464}"
        }
        if open() {
            div { class: "profile-menu", onclick: move |_| open.set(false),
                button { r#type: "button", "Profile Settings" }
                button { class: "destructive", r#type: "button", "Logout" }
            }
        }
    }
}
