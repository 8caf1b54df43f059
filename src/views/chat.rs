use crate::config::ReplyDelay;
use crate::conversation::{Conversation, PendingReplies, ReplyPlan, synthesize_reply};
use crate::scroll::{FollowAction, ScrollMetrics, follow_action, jump_control_visible};
use crate::timefmt::current_time;
use crate::types::ModelId;
use crate::views::{ChatInput, MessageBubble};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const READ_SCROLL_SCRIPT: &str = r#"
    const el = document.getElementById('chat-list');
    if (!el) { return { scrollTop: 0, scrollHeight: 0, clientHeight: 0 }; }
    return { scrollTop: el.scrollTop, scrollHeight: el.scrollHeight, clientHeight: el.clientHeight };
"#;

const SCROLL_TO_END_SCRIPT: &str = r#"
    const end = document.getElementById('chat-end');
    if (end) { end.scrollIntoView({ behavior: 'smooth' }); }
"#;

type ReplyTasks = Rc<RefCell<PendingReplies<Task>>>;

async fn scroll_to_end() {
    let _ = document::eval(SCROLL_TO_END_SCRIPT).await;
}

/// Cancels replies still waiting on their delay when the view goes away.
fn use_reply_tasks() -> ReplyTasks {
    let tasks = use_hook(ReplyTasks::default);
    {
        let tasks = tasks.clone();
        use_drop(move || {
            for task in tasks.borrow_mut().drain() {
                task.cancel();
            }
        });
    }
    tasks
}

#[component]
pub fn ChatView(selected_model: ModelId, reply_delay: ReplyDelay) -> Element {
    let mut conversation = use_signal(|| Conversation::new(current_time()));
    let mut at_bottom = use_signal(|| true);
    let reply_tasks = use_reply_tasks();

    // Re-runs on every list change and whenever the reader returns to the bottom.
    use_effect(move || {
        let _ = conversation.read();
        if follow_action(at_bottom()) == FollowAction::ScrollToEnd {
            spawn(scroll_to_end());
        }
    });

    let send_message = move |text: String| {
        let prompt = conversation.with_mut(|c| {
            c.push_user(&text, current_time())
                .map(|message| message.content.clone())
        });
        let Some(prompt) = prompt else {
            return;
        };

        let plan = ReplyPlan::sample(&mut rand::thread_rng(), reply_delay);
        let key = reply_tasks.borrow_mut().reserve();
        tracing::debug!(
            delay_ms = plan.delay.as_millis() as u64,
            template = plan.template,
            model = selected_model.value(),
            "scheduled simulated reply"
        );

        let tasks = reply_tasks.clone();
        let task = spawn(async move {
            tokio::time::sleep(plan.delay).await;
            tasks.borrow_mut().complete(key);
            let reply = synthesize_reply(&prompt, plan.template, selected_model, current_time());
            conversation.with_mut(|c| c.push_reply(reply));
        });
        reply_tasks.borrow_mut().track(key, task);
    };

    let snapshot = conversation();
    let show_jump = jump_control_visible(at_bottom());

    rsx! {
        div { class: "chat-wrap",
            div {
                id: "chat-list",
                class: "chat-list",
                onscroll: move |_| {
                    spawn(async move {
                        if let Ok(metrics) = document::eval(READ_SCROLL_SCRIPT).join::<ScrollMetrics>().await {
                            let near = metrics.is_near_bottom();
                            if near != at_bottom() {
                                at_bottom.set(near);
                            }
                        }
                    });
                },
                div { class: "chat-column",
                    for message in snapshot.messages() {
                        MessageBubble { key: "{message.id}", message: message.clone() }
                    }
                    div { id: "chat-end" }
                }
            }
            if show_jump {
                button {
                    class: "jump-to-bottom",
                    r#type: "button",
                    title: "Scroll to bottom",
                    onclick: move |_| {
                        spawn(scroll_to_end());
                    },
                    "\u{2193}"
                }
            }
        }
        ChatInput { on_send: send_message }
    }
}
