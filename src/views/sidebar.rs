use crate::history::{ChatHistory, ChatHistoryEntry};
use crate::timefmt::{current_time, format_relative_time, to_local};
use dioxus::prelude::*;

#[component]
pub fn ChatSidebar(open: Signal<bool>, history: Signal<ChatHistory>) -> Element {
    let mut open = open;
    let mut history = history;
    let can_clear = history.read().can_clear();
    let entries = history.read().entries().to_vec();
    let class = if open() { "sidebar open" } else { "sidebar" };

    rsx! {
        if open() {
            div { class: "sidebar-backdrop", onclick: move |_| open.set(false) }
        }
        aside { class: class,
            div { class: "sidebar-header",
                h2 { "Chat History" }
                button {
                    class: "icon-btn",
                    r#type: "button",
                    title: "Clear history",
                    disabled: !can_clear,
                    onclick: move |_| {
                        history.with_mut(|h| h.clear());
                        tracing::debug!("chat history cleared");
                    },
                    "\u{1F5D1}"
                }
            }
            button { class: "new-chat", r#type: "button", "+ New Chat" }
            div { class: "history-list",
                if entries.is_empty() {
                    div { class: "history-empty",
                        p { "No chat history yet" }
                        p { "Start a conversation to see it here" }
                    }
                } else {
                    for entry in entries {
                        HistoryItem { key: "{entry.id}", entry: entry.clone(), history }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryItem(entry: ChatHistoryEntry, history: Signal<ChatHistory>) -> Element {
    let mut history = history;
    let age = format_relative_time(to_local(entry.timestamp), current_time());
    let id = entry.id.clone();

    rsx! {
        div { class: "history-item",
            div { style: "flex: 1; min-width: 0;",
                h3 { class: "history-title", "{entry.title}" }
                div { class: "history-meta",
                    span { "{entry.model}" }
                    span { "\u{2022}" }
                    span { "{age}" }
                }
            }
            button {
                class: "icon-btn",
                r#type: "button",
                title: "Delete chat",
                onclick: move |ev: MouseEvent| {
                    ev.stop_propagation();
                    history.with_mut(|h| {
                        h.delete(&id);
                    });
                },
                "\u{1F5D1}"
            }
        }
    }
}
