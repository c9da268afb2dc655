//! Widget system for the interface
//!
//! Every control owns a fixed region of the screen, keeps its own state, and
//! reports a [`Command`] when an input event means something at the top
//! level. The event loop never reaches into a widget's state except through
//! the accessors each type exposes.

mod button;
mod input_field;
mod output_pane;

pub use button::Button;
pub use input_field::InputField;
pub use output_pane::{OutputPane, PaneLayout};

use super::event::{Command, InputEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

/// Base trait for all controls
pub trait Widget {
    /// Give or take input focus
    fn select(&mut self, focused: bool);

    fn is_selected(&self) -> bool;

    /// Consume one input event
    ///
    /// Widgets only change state while focused. The returned command is
    /// [`Command::None`] unless the event triggers this widget.
    fn key_input(&mut self, event: InputEvent) -> Command;

    /// Render the current state into the widget's region of `buf`
    ///
    /// Parts of the region outside `buf` are skipped.
    fn draw(&self, buf: &mut Buffer);
}

/// Write `text` at `(x, y)`, clipped to the buffer
///
/// Positions outside the buffer, including one past the last cell, are
/// ignored rather than treated as errors.
pub fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if !area.contains(Position::new(x, y)) {
        return;
    }
    let room = usize::from(area.right() - x);
    buf.set_stringn(x, y, text, room, style);
}

/// Blank out `rect` with `style`, clipped to the buffer
pub fn fill(buf: &mut Buffer, rect: Rect, style: Style) {
    let rect = rect.intersection(buf.area);
    let blank = " ".repeat(usize::from(rect.width));
    for y in rect.top()..rect.bottom() {
        put_str(buf, rect.x, y, &blank, style);
    }
}
