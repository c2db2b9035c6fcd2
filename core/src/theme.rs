use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// One of the five fixed presentation contexts a stylesheet is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum Theme {
    Light,
    Dark,
    Desktop,
    Tablet,
    Mobile,
}

/// Where a theme's custom properties are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeScope {
    pub selector: &'static str,
    /// Media condition wrapping the selector, e.g. `(max-width: 767px)`.
    pub media_query: Option<&'static str>,
}
impl ThemeScope {
    pub fn is_media_scoped(&self) -> bool {
        self.media_query.is_some()
    }
}

struct ThemeEntry {
    name: &'static str,
    scope: ThemeScope,
    source: &'static str,
    destination: &'static str,
    progress: &'static str,
}

// Indexed by `Theme as usize`.
static THEMES: [ThemeEntry; 5] = [
    ThemeEntry {
        name: "light",
        scope: ThemeScope {
            selector: ":root",
            media_query: None,
        },
        source: "tokens.sdsLight.json",
        destination: "tokens-light.css",
        progress: "📝 Building light theme...",
    },
    ThemeEntry {
        name: "dark",
        scope: ThemeScope {
            selector: "[data-theme=\"dark\"]",
            media_query: None,
        },
        source: "tokens.sdsDark.json",
        destination: "tokens-dark.css",
        progress: "🌙 Building dark theme...",
    },
    ThemeEntry {
        name: "desktop",
        scope: ThemeScope {
            selector: ":root",
            media_query: Some("(min-width: 1200px)"),
        },
        source: "tokens.desktop.json",
        destination: "tokens-desktop.css",
        progress: "💻 Building desktop breakpoint...",
    },
    ThemeEntry {
        name: "tablet",
        scope: ThemeScope {
            selector: ":root",
            media_query: Some("(min-width: 768px) and (max-width: 1199px)"),
        },
        source: "tokens.tablet.json",
        destination: "tokens-tablet.css",
        progress: "📱 Building tablet breakpoint...",
    },
    ThemeEntry {
        name: "mobile",
        scope: ThemeScope {
            selector: ":root",
            media_query: Some("(max-width: 767px)"),
        },
        source: "tokens.mobile.json",
        destination: "tokens-mobile.css",
        progress: "📲 Building mobile breakpoint...",
    },
];

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Light,
        Theme::Dark,
        Theme::Desktop,
        Theme::Tablet,
        Theme::Mobile,
    ];

    fn entry(self) -> &'static ThemeEntry {
        &THEMES[self as usize]
    }

    /// Lenient lookup: anything outside the fixed set is treated as `light`.
    pub fn from_identifier(identifier: &str) -> Theme {
        identifier.parse().unwrap_or_else(|_| {
            tracing::warn!(theme = identifier, "unknown theme, falling back to light");
            Theme::Light
        })
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }
    pub fn scope(self) -> ThemeScope {
        self.entry().scope
    }
    /// Default token source file name.
    pub fn source_file(self) -> &'static str {
        self.entry().source
    }
    /// Default stylesheet file name.
    pub fn destination_file(self) -> &'static str {
        self.entry().destination
    }
    pub fn progress_label(self) -> &'static str {
        self.entry().progress
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}

impl From<String> for Theme {
    fn from(identifier: String) -> Self {
        Theme::from_identifier(&identifier)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
