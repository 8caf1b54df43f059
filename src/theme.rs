use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    /// Glyph on the header toggle: the mode a click switches to.
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_icon: "\u{2600}",
            toggle_label: "Switch to light theme",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_icon: "\u{263E}",
            toggle_label: "Switch to dark theme",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0b14;
    --color-bg-secondary: #12121f;
    --color-bg-overlay: rgba(11, 11, 20, 0.8);
    --color-text-primary: #f4f4fb;
    --color-text-muted: #9a9ab5;
    --color-border: rgba(255, 255, 255, 0.12);
    --color-surface-muted: rgba(255, 255, 255, 0.06);
    --color-card: rgba(24, 24, 40, 0.6);
    --color-primary: #8b5cf6;
    --color-primary-glow: #c084fc;
    --color-primary-text: #ffffff;
    --color-destructive: #f87171;
    --color-positive: #4ade80;
    --color-sidebar-bg: rgba(16, 16, 28, 0.85);
    --color-backdrop: rgba(0, 0, 0, 0.5);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.bubble.assistant { background: var(--color-card); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f5fa;
    --color-bg-overlay: rgba(255, 255, 255, 0.8);
    --color-text-primary: #14141f;
    --color-text-muted: #5d5d73;
    --color-border: rgba(20, 20, 31, 0.12);
    --color-surface-muted: rgba(20, 20, 31, 0.05);
    --color-card: rgba(255, 255, 255, 0.75);
    --color-primary: #7c3aed;
    --color-primary-glow: #a855f7;
    --color-primary-text: #ffffff;
    --color-destructive: #dc2626;
    --color-positive: #16a34a;
    --color-sidebar-bg: rgba(248, 248, 252, 0.9);
    --color-backdrop: rgba(0, 0, 0, 0.35);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.bubble.assistant { background: var(--color-card); }
"#;
