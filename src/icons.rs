//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

use crate::garden::{PlantStatus, Season};
use crate::ui::components::toast::Severity;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Emoji
    }
}

/// Plant lifecycle icons
#[derive(Debug, Clone)]
pub struct PlantStatusIcons {
    pub planted: &'static str,
    pub sprouted: &'static str,
    pub flowering: &'static str,
    pub harvesting: &'static str,
    pub finished: &'static str,
}

/// Season icons
#[derive(Debug, Clone)]
pub struct SeasonIcons {
    pub spring: &'static str,
    pub summer: &'static str,
    pub fall: &'static str,
    pub winter: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub beds_title: &'static str,
    pub plants_title: &'static str,
    pub stats_title: &'static str,
    pub harvest: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub plant_status: PlantStatusIcons,
    pub season: SeasonIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            plant_status: PlantStatusIcons {
                planted: "🌰",
                sprouted: "🌱",
                flowering: "🌸",
                harvesting: "🧺",
                finished: "✅",
            },
            season: SeasonIcons {
                spring: "🌱",
                summer: "☀️",
                fall: "🍂",
                winter: "❄️",
            },
            ui: UiIcons {
                beds_title: "🏡",
                plants_title: "🌿",
                stats_title: "📊",
                harvest: "🧺",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            plant_status: PlantStatusIcons {
                planted: "●",
                sprouted: "▴",
                flowering: "❀",
                harvesting: "◆",
                finished: "✓",
            },
            season: SeasonIcons {
                spring: "❀",
                summer: "☀",
                fall: "✿",
                winter: "❄",
            },
            ui: UiIcons {
                beds_title: "▦",
                plants_title: "♣",
                stats_title: "▥",
                harvest: "◆",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            plant_status: PlantStatusIcons {
                planted: ".",
                sprouted: "^",
                flowering: "*",
                harvesting: "o",
                finished: "x",
            },
            season: SeasonIcons {
                spring: "Sp",
                summer: "Su",
                fall: "Fa",
                winter: "Wi",
            },
            ui: UiIcons {
                beds_title: "#",
                plants_title: ">",
                stats_title: "%",
                harvest: "o",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
        }
    }

    /// Icon for a plant lifecycle status
    #[must_use]
    pub fn plant_status(&self, status: PlantStatus) -> &'static str {
        let icons = self.icons().plant_status;
        match status {
            PlantStatus::Planted => icons.planted,
            PlantStatus::Sprouted => icons.sprouted,
            PlantStatus::Flowering => icons.flowering,
            PlantStatus::Harvesting => icons.harvesting,
            PlantStatus::Finished => icons.finished,
        }
    }

    /// Icon for a season
    #[must_use]
    pub fn season(&self, season: Season) -> &'static str {
        let icons = self.icons().season;
        match season {
            Season::Spring => icons.spring,
            Season::Summer => icons.summer,
            Season::Fall => icons.fall,
            Season::Winter => icons.winter,
        }
    }

    /// Icon for a notification severity
    #[must_use]
    pub fn severity(&self, severity: Severity) -> &'static str {
        let icons = self.icons().ui;
        match severity {
            Severity::Success => icons.success,
            Severity::Info => icons.info,
            Severity::Warning => icons.warning,
            Severity::Danger => icons.error,
        }
    }

    #[must_use]
    pub fn beds_title(&self) -> &'static str {
        self.icons().ui.beds_title
    }

    #[must_use]
    pub fn plants_title(&self) -> &'static str {
        self.icons().ui.plants_title
    }

    #[must_use]
    pub fn stats_title(&self) -> &'static str {
        self.icons().ui.stats_title
    }

    #[must_use]
    pub fn harvest(&self) -> &'static str {
        self.icons().ui.harvest
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Emoji);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_plant_status_icons() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.plant_status(PlantStatus::Sprouted), "🌱");
        assert_eq!(service.plant_status(PlantStatus::Finished), "✅");
    }

    #[test]
    fn test_severity_icons_ascii() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.severity(Severity::Danger), "X");
        assert_eq!(service.severity(Severity::Success), "+");
    }
}
