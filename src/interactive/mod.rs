//! Interactive TUI interface
//!
//! A small widget framework (inputs, buttons, a result pane) on top of
//! ratatui's buffer, driven by a single-threaded event loop.

mod app;
pub mod event;
pub mod focus;
pub mod palette;
pub mod preflight;
pub mod widgets;

pub use app::{App, Flow, SessionEnd, WidgetId, run_tui};
pub use event::{Command, InputEvent, SpecialKey};
pub use focus::FocusRing;
pub use palette::{Palette, PaletteKind, StyleId};
pub use preflight::{SessionAbort, TerminalCaps};
