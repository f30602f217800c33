//! Centralized theme configuration for the terminal renderer.
//!
//! All colors and glyphs are defined here. Render files use
//! `theme::module::CONSTANT` and do not hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors - vibrant Galaxy palette
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);
}

/// Toast styles, one entry per kind
pub mod notification {
    use super::*;
    use crate::notification::ToastKind;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
        pub icon: &'static str,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::SUCCESS,
        icon: "\u{2714}",
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::ERROR,
        icon: "\u{2716}",
    };

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::INFO,
        icon: "\u{2139}",
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::WARNING,
        icon: "\u{26a0}",
    };

    /// Unknown kinds get a neutral card and a plain bullet
    pub const OTHER: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
        icon: "\u{2022}",
    };

    pub const MESSAGE: Color = palette::TEXT_MUTED;
    pub const CLOSE: Color = palette::TEXT_DIM;
    pub const CLOSE_GLYPH: &str = "\u{00d7}";
    pub const TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

    pub fn colors(kind: &ToastKind) -> &'static NotificationColors {
        match kind {
            ToastKind::Success => &SUCCESS,
            ToastKind::Error => &ERROR,
            ToastKind::Info => &INFO,
            ToastKind::Warning => &WARNING,
            ToastKind::Other(_) => &OTHER,
        }
    }
}

/// Demo screen styles
pub mod demo {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const HEADING: Style = Style::new()
        .fg(palette::INFO)
        .add_modifier(Modifier::BOLD);
    pub const BODY: Color = palette::TEXT;
    pub const ANNOUNCEMENT: Color = palette::TEXT_MUTED;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
