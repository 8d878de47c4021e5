use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dark => "dark",
            Self::Light => "light",
        };
        write!(f, "{}", name)
    }
}

// StyleVariant
//
// class tokens for every themed region of the page.  the classes themselves are
// declared in the webapp's style module, one modifier per theme
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleVariant {
    pub page: &'static str,
    pub header: &'static str,
    pub card: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

// total mapping from theme to style tokens.  cheap enough to call on every render
pub fn derive_style(theme: Theme) -> StyleVariant {
    match theme {
        Theme::Dark => StyleVariant {
            page: "page page-dark",
            header: "site-header site-header-dark",
            card: "card card-dark",
            toggle_icon: "☀️",
            toggle_label: "Switch to light theme",
        },
        Theme::Light => StyleVariant {
            page: "page page-light",
            header: "site-header site-header-light",
            card: "card card-light",
            toggle_icon: "🌙",
            toggle_label: "Switch to dark theme",
        },
    }
}

// ThemeController
//
// the single owner of the display mode.  every session starts dark; nothing is
// persisted
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn style(&self) -> StyleVariant {
        derive_style(self.theme)
    }
}
