use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatMessage {
    /// Builds a message whose id is the role followed by the creation time in milliseconds.
    pub fn new(role: Role, content: impl Into<String>, timestamp: OffsetDateTime) -> Self {
        Self {
            id: message_id(role, timestamp),
            content: content.into(),
            role,
            timestamp,
            model: None,
        }
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = Some(model.label().to_string());
        self
    }
}

pub fn message_id(role: Role, timestamp: OffsetDateTime) -> String {
    let millis = timestamp.unix_timestamp_nanos() / 1_000_000;
    format!("{}-{}", role.as_str(), millis)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// The models offered by the header selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModelId {
    Mentify1,
    Mentify2,
    #[default]
    Mentify3,
    Mentuf4,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::Mentify1,
        ModelId::Mentify2,
        ModelId::Mentify3,
        ModelId::Mentuf4,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ModelId::Mentify1 => "mentify-1",
            ModelId::Mentify2 => "mentify-2",
            ModelId::Mentify3 => "mentify-3",
            ModelId::Mentuf4 => "mentuf-4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelId::Mentify1 => "Mentify 1",
            ModelId::Mentify2 => "Mentify 2",
            ModelId::Mentify3 => "Mentify 3",
            ModelId::Mentuf4 => "Mentuf 4",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.value() == value.trim())
    }

    /// Resolves a selector value, falling back to the default model for unknown values.
    pub fn from_value(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}
