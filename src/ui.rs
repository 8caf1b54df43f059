use crate::config::AppConfig;
use crate::history::{ChatHistory, MockHistory};
use crate::preferences::{PreferenceStore, ThemePersistence, initial_theme, platform_store};
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{ChatHeader, ChatSidebar, ChatView};
use dioxus::prelude::*;
use std::rc::Rc;

const MENTIFY_CSS: Asset = asset!("/assets/mentify.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    let preferences = use_hook(platform_store);
    let starting_theme = use_hook(|| initial_theme(&*preferences, config.default_theme));
    let theme = use_signal(|| starting_theme);
    let sidebar_open = use_signal(|| false);
    let selected_model = use_signal(|| config.default_model);
    let history = use_signal(|| ChatHistory::from_source(&MockHistory));

    use_theme_persistence(theme, starting_theme, preferences);

    rsx! {
        ThemeStyles { theme: theme() }
        div { class: "chat-layout",
            ChatSidebar { open: sidebar_open, history }
            div { class: "chat-main",
                ChatHeader { sidebar_open, selected_model, theme }
                ChatView {
                    selected_model: selected_model(),
                    reply_delay: config.reply_delay,
                }
            }
        }
    }
}

fn use_theme_persistence(
    theme: Signal<ThemeMode>,
    starting_theme: ThemeMode,
    store: Rc<dyn PreferenceStore>,
) {
    let mut persistence = ThemePersistence::new(starting_theme);
    use_effect(move || {
        let mode = theme();
        if let Err(err) = persistence.record(&*store, mode) {
            tracing::warn!(%err, ?mode, "failed to save theme preference");
        }
    });
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: MENTIFY_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}
