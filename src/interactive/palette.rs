//! Style table for the interface
//!
//! Built once at startup from what the terminal can display and passed
//! around by reference afterwards.

use ratatui::style::{Color, Style};

/// Role a style is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    /// Screen background and labels
    Main,
    /// Result pane contents
    Window,
    /// Result pane border and title
    WindowFrame,
    /// Text input fields
    Field,
    /// Regular buttons
    Button,
    /// The exit button
    ExitButton,
}

impl StyleId {
    pub const ALL: [Self; 6] = [
        Self::Main,
        Self::Window,
        Self::WindowFrame,
        Self::Field,
        Self::Button,
        Self::ExitButton,
    ];
}

/// Color depth the palette was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    /// Exact RGB colors
    Rich,
    /// The eight standard ANSI colors
    Basic,
}

/// Immutable mapping from [`StyleId`] to a style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    styles: [Style; 6],
}

impl Palette {
    /// Palette with exact colors (grey screen, navy panes)
    #[must_use]
    pub fn rich() -> Self {
        let grey = Color::Rgb(128, 128, 128);
        let black = Color::Rgb(0, 0, 0);
        let navy = Color::Rgb(0, 0, 128);
        let cyan = Color::Rgb(0, 255, 255);
        let yellow = Color::Rgb(255, 255, 0);
        let maroon = Color::Rgb(128, 0, 0);

        Self {
            kind: PaletteKind::Rich,
            styles: [
                Style::new().fg(black).bg(grey),
                Style::new().fg(cyan).bg(navy),
                Style::new().fg(yellow).bg(navy),
                Style::new().fg(cyan).bg(navy),
                Style::new().fg(yellow).bg(navy),
                Style::new().fg(black).bg(maroon),
            ],
        }
    }

    /// Fallback for terminals limited to the standard colors
    #[must_use]
    pub fn basic() -> Self {
        Self {
            kind: PaletteKind::Basic,
            styles: [
                Style::new().fg(Color::Black).bg(Color::White),
                Style::new().fg(Color::Cyan).bg(Color::Blue),
                Style::new().fg(Color::Yellow).bg(Color::Blue),
                Style::new().fg(Color::Cyan).bg(Color::Blue),
                Style::new().fg(Color::Yellow).bg(Color::Blue),
                Style::new().fg(Color::Black).bg(Color::Red),
            ],
        }
    }

    /// Pick a palette for a terminal reporting `colors` colors
    ///
    /// Exact colors need a 256-color (or true color) terminal.
    #[must_use]
    pub fn for_color_count(colors: u16) -> Self {
        if colors >= 256 {
            Self::rich()
        } else {
            Self::basic()
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PaletteKind {
        self.kind
    }

    #[must_use]
    pub const fn style(&self, id: StyleId) -> Style {
        self.styles[id as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::basic()
    }
}
