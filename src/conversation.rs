//! Conversation state and the locally simulated assistant reply.

use crate::config::ReplyDelay;
use crate::types::{ChatMessage, ModelId, Role};
use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;
use time::OffsetDateTime;

pub const WELCOME_MESSAGE_ID: &str = "welcome";

const WELCOME_TEXT: &str = "Hello! I'm Mentify-AI, your intelligent companion. I'm here to help you with a wide range of tasks, from answering questions to creative writing, code assistance, and much more. How can I assist you today?";

pub const REPLY_TEMPLATES: [&str; 5] = [
    "I understand your question. Let me help you with that...",
    "That's an interesting point! Here's what I think about it...",
    "Great question! Based on my knowledge, I can provide you with the following insights...",
    "I'd be happy to assist you with that. Let me break this down for you...",
    "Thank you for your message. Here's a comprehensive response to your inquiry...",
];

/// Ordered, append-only message sequence for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            messages: vec![welcome_message(now)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a user message holding the trimmed text. Blank input appends nothing.
    pub fn push_user(&mut self, text: &str, now: OffsetDateTime) -> Option<&ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.append(ChatMessage::new(Role::User, trimmed, now));
        self.messages.last()
    }

    pub fn push_reply(&mut self, reply: ChatMessage) {
        self.append(reply);
    }

    /// Suffixes the id with the message's position so replies landing in the
    /// same millisecond still get distinct list keys.
    fn append(&mut self, mut message: ChatMessage) {
        message.id = format!("{}-{}", message.id, self.messages.len());
        self.messages.push(message);
    }
}

fn welcome_message(now: OffsetDateTime) -> ChatMessage {
    let mut message = ChatMessage::new(Role::Assistant, WELCOME_TEXT, now).with_model(ModelId::Mentify3);
    message.id = WELCOME_MESSAGE_ID.to_string();
    message
}

/// When and how the simulated assistant will answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyPlan {
    pub delay: Duration,
    pub template: usize,
}

impl ReplyPlan {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, delay: ReplyDelay) -> Self {
        let delay_ms = rng.gen_range(delay.min_ms..delay.max_ms);
        Self {
            delay: Duration::from_millis(delay_ms),
            template: rng.gen_range(0..REPLY_TEMPLATES.len()),
        }
    }
}

/// The prompt's words, split on single spaces, in reverse order.
pub fn reversed_words(prompt: &str) -> String {
    prompt.split(' ').rev().collect::<Vec<_>>().join(" ")
}

pub fn synthesize_reply(
    prompt: &str,
    template: usize,
    model: ModelId,
    now: OffsetDateTime,
) -> ChatMessage {
    let opener = REPLY_TEMPLATES[template % REPLY_TEMPLATES.len()];
    let content = format!("{} {}.", opener, reversed_words(prompt));
    ChatMessage::new(Role::Assistant, content, now).with_model(model)
}

/// Replies that have been scheduled but not delivered yet.
///
/// Handles are removed once their reply lands, so only live ones are left to
/// cancel when the owning view goes away.
#[derive(Debug)]
pub struct PendingReplies<H> {
    next_key: u64,
    handles: HashMap<u64, H>,
}

impl<H> Default for PendingReplies<H> {
    fn default() -> Self {
        Self {
            next_key: 0,
            handles: HashMap::new(),
        }
    }
}

impl<H> PendingReplies<H> {
    pub fn reserve(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    pub fn track(&mut self, key: u64, handle: H) {
        self.handles.insert(key, handle);
    }

    pub fn complete(&mut self, key: u64) -> Option<H> {
        self.handles.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.handles.drain().map(|(_, handle)| handle)
    }
}
