//! Startup configuration read from the environment.
//!
//! Values come from the process environment, a `.env` file on desktop, or the
//! bundled `assets/config.env` (see `main.rs`). Anything unparseable falls back
//! to its default with a warning.

use crate::types::{ModelId, ThemeMode};
use std::env;

pub const DEFAULT_REPLY_MIN_MS: u64 = 1000;
pub const DEFAULT_REPLY_MAX_MS: u64 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Half-open range `[min_ms, max_ms)` for the simulated reply latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_REPLY_MIN_MS,
            max_ms: DEFAULT_REPLY_MAX_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub default_model: ModelId,
    pub default_theme: ThemeMode,
    pub reply_delay: ReplyDelay,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_model: ModelId::default(),
            default_theme: ThemeMode::default(),
            reply_delay: ReplyDelay::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_model = match lookup("MENTIFY_DEFAULT_MODEL") {
            Some(raw) => ModelId::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown MENTIFY_DEFAULT_MODEL, using default");
                defaults.default_model
            }),
            None => defaults.default_model,
        };

        let default_theme = match lookup("MENTIFY_THEME") {
            Some(raw) => ThemeMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown MENTIFY_THEME, using default");
                defaults.default_theme
            }),
            None => defaults.default_theme,
        };

        let min_ms = parse_millis(&lookup, "MENTIFY_REPLY_MIN_MS", DEFAULT_REPLY_MIN_MS);
        let max_ms = parse_millis(&lookup, "MENTIFY_REPLY_MAX_MS", DEFAULT_REPLY_MAX_MS);
        let reply_delay = if min_ms < max_ms {
            ReplyDelay { min_ms, max_ms }
        } else {
            tracing::warn!(min_ms, max_ms, "reply delay range is empty, using default");
            defaults.reply_delay
        };

        let log_filter = lookup("MENTIFY_LOG")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            default_model,
            default_theme,
            reply_delay,
            log_filter,
        }
    }
}

fn parse_millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid millisecond value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reply_delay, ReplyDelay { min_ms: 1000, max_ms: 3000 });
        assert_eq!(config.default_model, ModelId::Mentify3);
        assert_eq!(config.default_theme, ThemeMode::Dark);
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("MENTIFY_DEFAULT_MODEL", "mentuf-4"),
            ("MENTIFY_THEME", "light"),
            ("MENTIFY_REPLY_MIN_MS", "10"),
            ("MENTIFY_REPLY_MAX_MS", "20"),
            ("MENTIFY_LOG", "mentify=debug"),
        ]);
        assert_eq!(config.default_model, ModelId::Mentuf4);
        assert_eq!(config.default_theme, ThemeMode::Light);
        assert_eq!(config.reply_delay, ReplyDelay { min_ms: 10, max_ms: 20 });
        assert_eq!(config.log_filter, "mentify=debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("MENTIFY_DEFAULT_MODEL", "gpt-9"),
            ("MENTIFY_THEME", "sepia"),
            ("MENTIFY_REPLY_MIN_MS", "soon"),
        ]);
        assert_eq!(config.default_model, ModelId::Mentify3);
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert_eq!(config.reply_delay, ReplyDelay::default());
    }

    #[test]
    fn test_empty_delay_range_falls_back() {
        let config = config_from(&[
            ("MENTIFY_REPLY_MIN_MS", "500"),
            ("MENTIFY_REPLY_MAX_MS", "500"),
        ]);
        assert_eq!(config.reply_delay, ReplyDelay::default());
    }
}
