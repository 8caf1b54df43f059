//! Past-conversation summaries shown in the sidebar.
//!
//! Entries come from a [`HistorySource`] so the sidebar does not care whether
//! they are fixtures or something persisted later.

use crate::types::ModelId;
use once_cell::sync::Lazy;
use time::OffsetDateTime;
use time::macros::datetime;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatHistoryEntry {
    pub id: String,
    pub title: String,
    pub timestamp: OffsetDateTime,
    pub model: String,
}

impl ChatHistoryEntry {
    pub fn new(id: &str, title: &str, timestamp: OffsetDateTime, model: ModelId) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            timestamp,
            model: model.label().to_string(),
        }
    }
}

pub trait HistorySource {
    fn load(&self) -> Vec<ChatHistoryEntry>;
}

/// Fixed sample conversations.
pub struct MockHistory;

static MOCK_ENTRIES: Lazy<Vec<ChatHistoryEntry>> = Lazy::new(|| {
    vec![
        ChatHistoryEntry::new(
            "1",
            "The Evolution and Impact of AI Chat Applications",
            datetime!(2024-01-15 10:30:00 UTC),
            ModelId::Mentify3,
        ),
        ChatHistoryEntry::new(
            "2",
            "Weather Inquiry for San Francisco",
            datetime!(2024-01-15 09:15:00 UTC),
            ModelId::Mentify2,
        ),
        ChatHistoryEntry::new(
            "3",
            "User Inquiry about React Components",
            datetime!(2024-01-14 14:22:00 UTC),
            ModelId::Mentify1,
        ),
        ChatHistoryEntry::new(
            "4",
            "Creative Writing Assistant",
            datetime!(2024-01-14 11:45:00 UTC),
            ModelId::Mentuf4,
        ),
        ChatHistoryEntry::new(
            "5",
            "Code Review and Optimization",
            datetime!(2024-01-13 16:30:00 UTC),
            ModelId::Mentify3,
        ),
    ]
});

impl HistorySource for MockHistory {
    fn load(&self) -> Vec<ChatHistoryEntry> {
        MOCK_ENTRIES.clone()
    }
}

/// Sidebar-local copy of the history. Edits never reach the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatHistory {
    entries: Vec<ChatHistoryEntry>,
}

impl ChatHistory {
    pub fn from_source(source: &dyn HistorySource) -> Self {
        Self {
            entries: source.load(),
        }
    }

    pub fn entries(&self) -> &[ChatHistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the entry with `id`; returns whether one was found.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn can_clear(&self) -> bool {
        !self.entries.is_empty()
    }
}
