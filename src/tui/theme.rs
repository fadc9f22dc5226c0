//! Color palettes for dark and light mode.
//!
//! Every palette color is an RGB value so fades can blend foreground colors
//! towards the background.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::RgbColor;

/// Semantic color theme for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Mode this palette belongs to
    pub mode: ThemeMode,

    // Brand colors
    /// Name, headings and links
    pub primary: Color,
    /// Buttons, bars and active navigation
    pub accent: Color,
    /// Confirmations
    pub success: Color,
    /// Errors
    pub error: Color,
    /// Warnings, e.g. a theme that could not be saved
    pub warning: Color,

    // Text hierarchy
    /// Body text
    pub text: Color,
    /// Secondary text such as descriptions
    pub text_secondary: Color,
    /// Hints and placeholders
    pub text_muted: Color,

    // Backgrounds
    /// Page background
    pub background: Color,
    /// Selected chip or menu entry background
    pub highlight_bg: Color,
    /// Cards, the opaque navbar and popups
    pub surface: Color,
    /// Borders and separators
    pub border: Color,

    // State indicators
    /// Active element
    pub active: Color,
    /// Inactive element
    pub inactive: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

impl Theme {
    /// Dark palette: gray-900 background with indigo accents.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            primary: rgb(129, 140, 248),
            accent: rgb(99, 102, 241),
            success: rgb(74, 222, 128),
            error: rgb(248, 113, 113),
            warning: rgb(251, 191, 36),

            text: rgb(243, 244, 246),
            text_secondary: rgb(209, 213, 219),
            text_muted: rgb(156, 163, 175),

            background: rgb(17, 24, 39),
            highlight_bg: rgb(55, 65, 81),
            surface: rgb(31, 41, 55),
            border: rgb(55, 65, 81),

            active: rgb(129, 140, 248),
            inactive: rgb(107, 114, 128),
        }
    }

    /// Light palette: gray-50 background, indigo-600 accents.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            primary: rgb(79, 70, 229),
            accent: rgb(79, 70, 229),
            success: rgb(22, 163, 74),
            error: rgb(220, 38, 38),
            warning: rgb(217, 119, 6),

            text: rgb(31, 41, 55),
            text_secondary: rgb(75, 85, 99),
            text_muted: rgb(107, 114, 128),

            background: rgb(249, 250, 251),
            highlight_bg: rgb(224, 231, 255),
            surface: rgb(255, 255, 255),
            border: rgb(229, 231, 235),

            active: rgb(79, 70, 229),
            inactive: rgb(156, 163, 175),
        }
    }

    /// Palette for a mode.
    #[must_use]
    pub const fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Renders `color` at the given opacity over the page background.
    ///
    /// Non-RGB colors are returned unchanged once `opacity` passes one half,
    /// and as the background before that.
    #[must_use]
    pub fn fade(&self, color: Color, opacity: f32) -> Color {
        self.blend(color, self.background, opacity)
    }

    /// Renders `color` at the given opacity over `base`.
    #[must_use]
    pub fn blend(&self, color: Color, base: Color, opacity: f32) -> Color {
        match (to_rgb(color), to_rgb(base)) {
            (Some(fg), Some(bg)) => bg.mix(fg, opacity).to_ratatui_color(),
            _ if opacity >= 0.5 => color,
            _ => base,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn to_rgb(color: Color) -> Option<RgbColor> {
    match color {
        Color::Rgb(r, g, b) => Some(RgbColor::new(r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
        assert_eq!(Theme::light().mode, ThemeMode::Light);
    }

    #[test]
    fn test_contrast() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, dark.background);
        assert_ne!(light.text, light.background);
    }

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::dark();
        assert_eq!(theme.fade(theme.text, 0.0), theme.background);
        assert_eq!(theme.fade(theme.text, 1.0), theme.text);
    }

    #[test]
    fn test_fade_halfway_is_between() {
        let theme = Theme::light();
        let half = theme.fade(Color::Rgb(0, 0, 0), 0.5);
        let Color::Rgb(r, _, _) = half else {
            panic!("expected rgb");
        };
        assert!(r > 100 && r < 150);
    }

    #[test]
    fn test_fade_named_color_snaps() {
        let theme = Theme::dark();
        assert_eq!(theme.fade(Color::Yellow, 0.2), theme.background);
        assert_eq!(theme.fade(Color::Yellow, 0.8), Color::Yellow);
    }
}
