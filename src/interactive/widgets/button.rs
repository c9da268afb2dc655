//! Push button

use super::{Widget, fill, put_str};
use crate::interactive::event::{Command, InputEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

/// One-line button that reports a fixed command when activated
#[derive(Debug, Clone)]
pub struct Button {
    area: Rect,
    label: String,
    label_offset: u16,
    style: Style,
    command: Command,
    selected: bool,
}

impl Button {
    /// Create a button `width` cells wide at `(x, y)`
    ///
    /// The label is cut to leave room for the focus brackets and centered.
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, label: &str, style: Style, command: Command) -> Self {
        let room = usize::from(width.saturating_sub(2));
        let mut label_width = 0;
        let label: String = label
            .chars()
            .take_while(|ch| {
                label_width += ch.width().unwrap_or(0);
                label_width <= room
            })
            .collect();
        let used = label_width.min(room) as u16;
        let label_offset = width.saturating_sub(used) / 2;

        Self {
            area: Rect::new(x, y, width, 1),
            label,
            label_offset,
            style,
            command,
            selected: false,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn select(&mut self, focused: bool) {
        self.selected = focused;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn key_input(&mut self, event: InputEvent) -> Command {
        if self.selected && event.is_activate() {
            self.command
        } else {
            Command::None
        }
    }

    fn draw(&self, buf: &mut Buffer) {
        let Rect { x, y, width, .. } = self.area;
        fill(buf, self.area, self.style);
        if self.selected && width >= 2 {
            put_str(buf, x, y, "[", self.style);
            put_str(buf, x + width - 1, y, "]", self.style);
        }
        put_str(buf, x + self.label_offset, y, &self.label, self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::event::SpecialKey;
    use crate::interactive::widgets::test_support::row_text;

    fn search_button() -> Button {
        Button::new(0, 0, 14, "Search", Style::new(), Command::Search)
    }

    #[test]
    fn unfocused_button_ignores_activation() {
        let mut button = search_button();
        assert_eq!(
            button.key_input(InputEvent::SpecialKey(SpecialKey::Enter)),
            Command::None
        );
        assert_eq!(button.key_input(InputEvent::Character(' ')), Command::None);
    }

    #[test]
    fn focused_button_reports_its_command() {
        let mut button = search_button();
        button.select(true);
        assert_eq!(
            button.key_input(InputEvent::SpecialKey(SpecialKey::Enter)),
            Command::Search
        );
        assert_eq!(button.key_input(InputEvent::Character(' ')), Command::Search);
        assert_eq!(button.key_input(InputEvent::Character('x')), Command::None);
        assert_eq!(
            button.key_input(InputEvent::SpecialKey(SpecialKey::Down)),
            Command::None
        );
    }

    #[test]
    fn label_is_centered_and_bracketed_when_focused() {
        let mut button = search_button();
        let mut buf = Buffer::empty(Rect::new(0, 0, 14, 1));

        button.draw(&mut buf);
        assert_eq!(row_text(&buf, 0), "    Search    ");

        button.select(true);
        button.draw(&mut buf);
        assert_eq!(row_text(&buf, 0), "[   Search   ]");
    }

    #[test]
    fn long_label_is_truncated() {
        let button = Button::new(0, 0, 6, "Searching", Style::new(), Command::Search);
        assert_eq!(button.label(), "Sear");

        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        button.draw(&mut buf);
        assert_eq!(row_text(&buf, 0), " Sear ");
    }

    #[test]
    fn drawing_past_the_screen_edge_is_harmless() {
        let mut button = Button::new(10, 0, 14, "Exit", Style::new(), Command::Exit);
        button.select(true);
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 1));
        button.draw(&mut buf);
        assert_eq!(row_text(&buf, 0), "          [    E");
    }
}
