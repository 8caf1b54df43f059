//! Draft handling for the message composer.

/// The text box stops growing at this height and scrolls instead.
pub const MAX_TEXTAREA_HEIGHT_PX: f64 = 120.0;

pub const DEFAULT_PLACEHOLDER: &str = "Send a message...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    Submit,
    Newline,
}

/// Text to hand to the send handler, if the draft may be sent at all.
pub fn submission(draft: &str, disabled: bool) -> Option<String> {
    let trimmed = draft.trim();
    if disabled || trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn key_intent(is_enter: bool, shift: bool) -> Option<KeyIntent> {
    match (is_enter, shift) {
        (true, false) => Some(KeyIntent::Submit),
        (true, true) => Some(KeyIntent::Newline),
        _ => None,
    }
}

pub fn can_send(draft: &str, disabled: bool) -> bool {
    !disabled && !draft.trim().is_empty()
}

pub fn textarea_height(scroll_height: f64) -> f64 {
    scroll_height.clamp(0.0, MAX_TEXTAREA_HEIGHT_PX)
}

pub fn textarea_overflows(scroll_height: f64) -> bool {
    scroll_height > MAX_TEXTAREA_HEIGHT_PX
}
