use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #faf7f1;
    --color-bg-surface: #ffffff;
    --color-bg-soft: #f3eee4;
    --color-border: #e4dccb;
    --color-border-soft: #efe9dc;
    --color-text-primary: #3c3227;
    --color-text-heading: #2e261c;
    --color-text-muted: #967657;
    --color-accent: #568156;
    --color-accent-strong: #446844;
    --color-accent-soft: #eef4ee;
    --color-accent-border: #d5e3d5;
    --color-ink: #3c3227;
    --color-ink-strong: #2a231a;
    --color-chat-user-bg: #568156;
    --color-chat-user-text: #ffffff;
    --color-chat-model-bg: #ffffff;
    --color-chat-model-text: #3c3227;
    --color-chip-bg: #ffffff;
    --color-bar: #dbccb8;
    --color-bar-peak: #568156;
    --color-timestamp: #a79a86;
    --color-shimmer: #568156;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #1d1a15;
    --color-bg-surface: #262219;
    --color-bg-soft: #2e2920;
    --color-border: #3b352a;
    --color-border-soft: #332d23;
    --color-text-primary: #e8e2d5;
    --color-text-heading: #f3efe6;
    --color-text-muted: #b3a48d;
    --color-accent: #7aa87a;
    --color-accent-strong: #8fbc8f;
    --color-accent-soft: #2a312a;
    --color-accent-border: #3d4a3d;
    --color-ink: #e8e2d5;
    --color-ink-strong: #f3efe6;
    --color-chat-user-bg: #568156;
    --color-chat-user-text: #ffffff;
    --color-chat-model-bg: #262219;
    --color-chat-model-text: #e8e2d5;
    --color-chip-bg: #2e2920;
    --color-bar: #4a4336;
    --color-bar-peak: #7aa87a;
    --color-timestamp: #8a7f6c;
    --color-shimmer: #7aa87a;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
