pub mod clipboard;
pub mod composer;
pub mod config;
pub mod conversation;
pub mod history;
pub mod preferences;
pub mod scroll;
pub mod theme;
pub mod timefmt;
pub mod types;
pub mod ui;
pub mod views;
