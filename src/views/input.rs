use crate::composer::{
    DEFAULT_PLACEHOLDER, KeyIntent, can_send, key_intent, submission, textarea_height,
    textarea_overflows,
};
use dioxus::events::Key;
use dioxus::prelude::*;

const TEXTAREA_ID: &str = "composer-input";

const MEASURE_SCRIPT: &str = r#"
    const el = document.getElementById('composer-input');
    if (!el) { return 0; }
    el.style.height = 'auto';
    return el.scrollHeight;
"#;

const RESET_SCRIPT: &str = r#"
    const el = document.getElementById('composer-input');
    if (el) { el.style.height = 'auto'; el.style.overflowY = 'hidden'; }
"#;

fn resize_script(height: f64, overflow: bool) -> String {
    let overflow = if overflow { "auto" } else { "hidden" };
    format!(
        "const el = document.getElementById('{TEXTAREA_ID}'); \
         if (el) {{ el.style.height = '{height}px'; el.style.overflowY = '{overflow}'; }}"
    )
}

/// Grows the text box with its content until it hits the cap, then lets it scroll.
async fn fit_textarea() {
    let Ok(scroll_height) = document::eval(MEASURE_SCRIPT).join::<f64>().await else {
        return;
    };
    let script = resize_script(textarea_height(scroll_height), textarea_overflows(scroll_height));
    let _ = document::eval(&script).await;
}

#[component]
pub fn ChatInput(
    on_send: EventHandler<String>,
    #[props(default)] disabled: bool,
    #[props(default = DEFAULT_PLACEHOLDER.to_string())] placeholder: String,
) -> Element {
    let mut draft = use_signal(String::new);
    let mut recording = use_signal(|| false);

    let mut submit = move || {
        if let Some(text) = submission(&draft(), disabled) {
            on_send.call(text);
            draft.set(String::new());
            spawn(async move {
                let _ = document::eval(RESET_SCRIPT).await;
            });
        }
    };

    let ready = can_send(&draft(), disabled);
    let mic_class = if recording() { "icon-btn recording" } else { "icon-btn" };
    let send_class = if ready { "icon-btn send-btn ready" } else { "icon-btn send-btn" };

    rsx! {
        div { class: "composer",
            div { class: "composer-inner",
                button {
                    class: "icon-btn",
                    r#type: "button",
                    title: "Attach file",
                    disabled: disabled,
                    "\u{1F4CE}"
                }
                textarea {
                    id: TEXTAREA_ID,
                    rows: "1",
                    placeholder: "{placeholder}",
                    value: "{draft}",
                    disabled: disabled,
                    oninput: move |ev: FormEvent| {
                        draft.set(ev.value());
                        spawn(fit_textarea());
                    },
                    onkeydown: move |ev: KeyboardEvent| {
                        let intent = key_intent(ev.key() == Key::Enter, ev.modifiers().shift());
                        if intent == Some(KeyIntent::Submit) {
                            ev.prevent_default();
                            submit();
                        }
                    },
                }
                button {
                    class: mic_class,
                    r#type: "button",
                    title: "Voice input",
                    disabled: disabled,
                    onclick: move |_| recording.set(!recording()),
                    "\u{1F3A4}"
                }
                button {
                    class: send_class,
                    r#type: "button",
                    title: "Send",
                    disabled: !ready,
                    onclick: move |_| submit(),
                    "\u{27A4}"
                }
            }
            p { class: "composer-hint", "Press Enter to send, Shift+Enter for new line" }
        }
    }
}
