//! Startup checks and session-ending conditions
//!
//! The layout is computed once from the terminal size, so the terminal must
//! be big enough up front and must not change size afterwards.

use super::palette::Palette;
use anyhow::{Context, Result};
use std::env;
use std::ffi::OsStr;
use thiserror::Error;

/// Smallest terminal the layout fits in
pub const MIN_WIDTH: u16 = 31;
pub const MIN_HEIGHT: u16 = 11;

/// Fewest colors the interface can be drawn with
pub const MIN_COLORS: u16 = 8;

/// Why an interactive session cannot start or has to stop
///
/// The messages are shown to the user once the terminal is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionAbort {
    #[error("Terminal size too small!")]
    TooSmall { width: u16, height: u16 },
    #[error("Color support required!")]
    NoColor,
    #[error("Not enough colors! ({available} available, {} required)", MIN_COLORS)]
    TooFewColors { available: u16 },
    #[error("Do not resize terminal!")]
    Resized,
}

/// What the terminal reported at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    pub width: u16,
    pub height: u16,
    pub colors: u16,
}

impl TerminalCaps {
    /// Ask the terminal for its size and color support
    ///
    /// crossterm never reports fewer than 8 colors on Unix, so a non-empty
    /// `NO_COLOR` or `TERM=dumb` is what counts as no color support there.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn probe() -> Result<Self> {
        let (width, height) = crossterm::terminal::size().context("Failed to query terminal size")?;
        let colors = effective_colors(
            env::var_os("NO_COLOR").as_deref(),
            env::var_os("TERM").as_deref(),
            crossterm::style::available_color_count(),
        );
        Ok(Self {
            width,
            height,
            colors,
        })
    }

    /// Validate the capabilities and choose a palette
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition, size before color.
    pub fn check(&self) -> Result<Palette, SessionAbort> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(SessionAbort::TooSmall {
                width: self.width,
                height: self.height,
            });
        }
        // A monochrome terminal reports 0 or 2 colors
        if self.colors <= 2 {
            return Err(SessionAbort::NoColor);
        }
        if self.colors < MIN_COLORS {
            return Err(SessionAbort::TooFewColors {
                available: self.colors,
            });
        }
        Ok(Palette::for_color_count(self.colors))
    }
}

/// Color count after honoring `NO_COLOR` and dumb terminals
fn effective_colors(no_color: Option<&OsStr>, term: Option<&OsStr>, reported: u16) -> u16 {
    let no_color = no_color.is_some_and(|value| !value.is_empty());
    let dumb = term.is_some_and(|value| value == "dumb");
    if no_color || dumb { 0 } else { reported }
}
