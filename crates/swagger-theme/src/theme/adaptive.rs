//! Resolution of the `auto` selection from the system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Maps a `prefers-color-scheme: dark` media query result to a mode.
    pub fn from_prefers_dark(matches: bool) -> Self {
        if matches {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

/// Something that can report whether the user prefers a dark color scheme.
///
/// Implemented for [`ColorMode`] itself (a fixed answer), for plain
/// `fn() -> ColorMode` detectors, and for [`OsColorScheme`].
pub trait ColorSchemeSource {
    fn color_mode(&self) -> ColorMode;
}

impl ColorSchemeSource for ColorMode {
    fn color_mode(&self) -> ColorMode {
        *self
    }
}

impl ColorSchemeSource for fn() -> ColorMode {
    fn color_mode(&self) -> ColorMode {
        self()
    }
}

/// Reads the color mode from the operating system settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsColorScheme;

impl ColorSchemeSource for OsColorScheme {
    fn color_mode(&self) -> ColorMode {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            OsThemeMode::Light => ColorMode::Light,
        }
    }
}

/// Picks the concrete theme `auto` stands for under `mode`.
///
/// # Example
///
/// ```rust
/// use swagger_theme::{resolve_auto, ColorMode};
///
/// assert_eq!(resolve_auto(ColorMode::Dark, "classic", "dark"), "dark");
/// assert_eq!(resolve_auto(ColorMode::Light, "classic", "dark"), "classic");
/// ```
pub fn resolve_auto<'a>(mode: ColorMode, light: &'a str, dark: &'a str) -> &'a str {
    match mode {
        ColorMode::Light => light,
        ColorMode::Dark => dark,
    }
}
