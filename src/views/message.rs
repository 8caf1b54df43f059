use crate::clipboard;
use crate::timefmt::{format_clock_time, to_local};
use crate::types::{ChatMessage, Role};
use dioxus::prelude::*;
use std::time::Duration;

/// How long the "Copied" acknowledgement stays up.
pub const COPY_ACK: Duration = Duration::from_secs(2);

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let role = role_class(message.role);
    let is_assistant = matches!(message.role, Role::Assistant);
    let time = format_clock_time(to_local(message.timestamp));
    let model = message.model.clone().filter(|_| is_assistant);

    rsx! {
        div { class: format_args!("message-row {}", role),
            if is_assistant {
                div { class: "avatar assistant", "AI" }
            }
            div { class: "message-stack",
                div { class: format_args!("bubble {}", role), "{message.content}" }
                div { class: "message-meta",
                    span { "{time}" }
                    if let Some(model) = model {
                        span { "\u{2022}" }
                        span { "{model}" }
                    }
                }
                if is_assistant {
                    MessageActions { content: message.content.clone() }
                }
            }
            if !is_assistant {
                div { class: "avatar user", "You" }
            }
        }
    }
}

/// Copy plus thumbs up/down. Only copy does anything.
#[component]
fn MessageActions(content: String) -> Element {
    let mut copied = use_signal(|| false);

    let on_copy = move |_| {
        let text = content.clone();
        spawn(async move {
            if let Err(err) = clipboard::write_text(&text).await {
                tracing::warn!(%err, "copy to clipboard failed");
            }
            copied.set(true);
            tokio::time::sleep(COPY_ACK).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "message-actions",
            button { class: "icon-btn", r#type: "button", title: "Copy", onclick: on_copy, "\u{2398}" }
            button { class: "icon-btn feedback-up", r#type: "button", title: "Good response", "\u{1F44D}" }
            button { class: "icon-btn feedback-down", r#type: "button", title: "Bad response", "\u{1F44E}" }
            if copied() {
                span { class: "copied", "Copied" }
            }
        }
    }
}
