//! Color theme and glyphs for the scaffold demo.
//!
//! Uses the Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use collapsible_types::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const SHADOW: Color = Color::Rgb(13, 12, 12); // dragonBlack0

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const INK_ON_YELLOW: Color = Color::Rgb(22, 22, 29);
}

/// Resolved theme palette used by the demo screen.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub shadow: Color,
    pub text_primary: Color,
    pub primary: Color,
    pub image_bg: Color,
    pub image_text: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            shadow: colors::SHADOW,
            text_primary: colors::TEXT_PRIMARY,
            primary: colors::PRIMARY,
            image_bg: colors::YELLOW,
            image_text: colors::INK_ON_YELLOW,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            shadow: Color::DarkGray,
            text_primary: Color::White,
            primary: Color::White,
            image_bg: Color::Yellow,
            image_text: Color::Black,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Item borders and bullets. ASCII mode drops box-drawing borders.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub item_border: Option<BorderType>,
    pub bullet: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            item_border: None,
            bullet: "*",
        }
    } else {
        Glyphs {
            item_border: Some(BorderType::Rounded),
            bullet: "•",
        }
    }
}

/// Pre-composed styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn background(palette: &Palette) -> Style {
        Style::default().bg(palette.bg_dark).fg(palette.text_primary)
    }

    #[must_use]
    pub fn app_bar(palette: &Palette) -> Style {
        Style::default()
            .bg(palette.bg_panel)
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn image(palette: &Palette) -> Style {
        Style::default().bg(palette.image_bg).fg(palette.image_text)
    }

    #[must_use]
    pub fn item_border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn item_text(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn shadow(palette: &Palette) -> Style {
        Style::default().bg(palette.shadow).add_modifier(Modifier::DIM)
    }
}
