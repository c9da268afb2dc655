//! Single-line text input

use super::{Widget, fill, put_str};
use crate::core::WILDCARD;
use crate::interactive::event::{Command, InputEvent, SpecialKey};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

const CURSOR: char = '_';

/// Text field accepting letters, and the wildcard when `masked`
#[derive(Debug, Clone)]
pub struct InputField {
    area: Rect,
    style: Style,
    masked: bool,
    text: String,
    selected: bool,
}

impl InputField {
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, style: Style, masked: bool) -> Self {
        Self {
            area: Rect::new(x, y, width, 1),
            style,
            masked,
            text: String::new(),
            selected: false,
        }
    }

    /// Current contents
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_masked(&self) -> bool {
        self.masked
    }

    fn accepts(&self, ch: char) -> bool {
        ch.is_alphabetic() || (self.masked && ch == WILDCARD)
    }

    /// What the field shows: the tail that fits, then the cursor cell
    #[must_use]
    pub fn visible_text(&self) -> String {
        let room = usize::from(self.area.width.saturating_sub(1));
        let mut used = 0;
        let mut tail: Vec<char> = self
            .text
            .chars()
            .rev()
            .take_while(|ch| {
                used += ch.width().unwrap_or(0);
                used <= room
            })
            .collect();
        tail.reverse();

        let mut shown: String = tail.into_iter().collect();
        shown.push(if self.selected { CURSOR } else { ' ' });
        shown
    }
}

impl Widget for InputField {
    fn select(&mut self, focused: bool) {
        self.selected = focused;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn key_input(&mut self, event: InputEvent) -> Command {
        if !self.selected {
            return Command::None;
        }
        match event {
            InputEvent::Character(ch) if self.accepts(ch) => {
                self.text.extend(ch.to_lowercase());
            }
            InputEvent::SpecialKey(SpecialKey::Backspace) => {
                self.text.pop();
            }
            _ => {}
        }
        Command::None
    }

    fn draw(&self, buf: &mut Buffer) {
        fill(buf, self.area, self.style);
        put_str(buf, self.area.x, self.area.y, &self.visible_text(), self.style);
    }
}
