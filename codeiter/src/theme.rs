//! Color theme system for codeiter.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every UI surface
//! codeiter renders. Two built-in themes are provided:
//!
//! - `dark` — ANSI 16 colors, works on any terminal including 256-color SSH
//!   sessions with no truecolor support.
//! - `catppuccin_mocha` — Catppuccin Mocha palette in RGB; requires truecolor.
//!
//! Toast colors are not part of a theme: error and success toasts use the same
//! two fixed colors everywhere.

use ratatui::style::Color;

/// Background of an error toast (`#ff4081`).
pub const TOAST_ERROR: Color = Color::Rgb(0xff, 0x40, 0x81);
/// Background of a success toast (`#00ffc3`).
pub const TOAST_SUCCESS: Color = Color::Rgb(0x00, 0xff, 0xc3);
/// Foreground used on both toast backgrounds.
pub const TOAST_TEXT: Color = Color::Black;

/// All color values used across codeiter's UI surfaces.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color for the currently focused panel.
    pub border_active: Color,
    /// Border color for unfocused panels.
    pub border_inactive: Color,

    // Tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Form
    /// Placeholder / hint text inside empty inputs and placeholder panels.
    pub placeholder: Color,
    /// Model label next to the picker.
    pub model_label: Color,
    /// Busy spinner and "Improving…" text.
    pub busy: Color,

    // Diff view
    pub diff_added: Color,
    pub diff_removed: Color,
    pub diff_context: Color,

    // Markdown
    pub md_heading: Color,
    pub md_code: Color,
    pub md_bullet: Color,

    // Status bar
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    /// Mode indicator color when in NORMAL mode.
    pub status_mode_normal: Color,
    /// Mode indicator color when in INSERT mode.
    pub status_mode_insert: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            tab_active: Color::Cyan,
            tab_inactive: Color::Gray,

            placeholder: Color::DarkGray,
            model_label: Color::Magenta,
            busy: Color::Yellow,

            diff_added: Color::Green,
            diff_removed: Color::Red,
            diff_context: Color::Reset,

            md_heading: Color::Cyan,
            md_code: Color::Yellow,
            md_bullet: Color::Magenta,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode_normal: Color::Cyan,
            status_mode_insert: Color::Green,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let green = Color::Rgb(166, 227, 161);    // #a6e3a1
        let red = Color::Rgb(243, 139, 168);      // #f38ba8
        let yellow = Color::Rgb(249, 226, 175);   // #f9e2af
        let teal = Color::Rgb(148, 226, 213);     // #94e2d5
        let mauve = Color::Rgb(203, 166, 247);    // #cba6f7
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface1 = Color::Rgb(69, 71, 90);    // #45475a
        let text = Color::Rgb(205, 214, 244);     // #cdd6f4
        let peach = Color::Rgb(250, 179, 135);    // #fab387

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            tab_active: lavender,
            tab_inactive: overlay1,

            placeholder: overlay1,
            model_label: mauve,
            busy: peach,

            diff_added: green,
            diff_removed: red,
            diff_context: text,

            md_heading: teal,
            md_code: yellow,
            md_bullet: mauve,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode_normal: lavender,
            status_mode_insert: green,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(theme = other, "unknown theme, falling back to 'dark'");
                Self::dark()
            }
        }
    }
}
