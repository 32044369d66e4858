use iced::theme::Palette;
use iced::{Color, Theme};

/// Named UI colors shared by every widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) danger: Color,
    pub(crate) success: Color,
    pub(crate) outline: Color,
    pub(crate) scrim: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xF7, 0xF8, 0xFA),
            surface: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            foreground: Color::from_rgb8(0x11, 0x18, 0x27),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            accent: Color::from_rgb8(0x25, 0x63, 0xEB),
            accent_soft: Color::from_rgb8(0xDB, 0xEA, 0xFE),
            danger: Color::from_rgb8(0xDC, 0x26, 0x26),
            success: Color::from_rgb8(0x16, 0xA3, 0x4A),
            outline: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            scrim: Color::from_rgba8(0x11, 0x18, 0x27, 0.45),
        }
    }
}

/// Resolved application theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppTheme {
    palette: ColorPalette,
}

impl AppTheme {
    /// Return the UI color palette.
    pub(crate) fn palette(&self) -> ColorPalette {
        self.palette
    }
}

/// Owns the active theme and derives the toolkit theme from it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    theme: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the currently active theme.
    pub(crate) fn current(&self) -> &AppTheme {
        &self.theme
    }

    /// Build the toolkit theme from the active palette.
    pub(crate) fn iced_theme(&self) -> Theme {
        let palette = self.theme.palette();

        Theme::custom(
            String::from("crewdesk"),
            Palette {
                background: palette.background,
                text: palette.foreground,
                primary: palette.accent,
                success: palette.success,
                warning: palette.danger,
                danger: palette.danger,
            },
        )
    }
}

/// Read-only theme handle passed down to widget view functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}
