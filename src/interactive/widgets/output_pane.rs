//! Scrollable multi-column word list
//!
//! Words of a single search all have the mask's length, so they are laid out
//! in fixed-width columns and wrapped into rows. The rows are rendered once
//! into an off-screen buffer when the list changes; drawing copies the
//! visible window of that buffer into the frame.

use super::{Widget, fill, put_str};
use crate::interactive::event::{Command, InputEvent, SpecialKey};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Widget as _};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

const SCROLL_UP: &str = "↑";
const SCROLL_DOWN: &str = "↓";

/// Column layout of a word list inside a given width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneLayout {
    /// Display width of one word
    pub word_width: usize,
    /// Words placed on each row
    pub per_row: usize,
    /// Rows needed for the whole list
    pub rows: usize,
}

impl PaneLayout {
    /// Lay out `words` in rows of `inner_width` cells
    ///
    /// Words are separated by one space and the last word on a row needs no
    /// trailing space. A word wider than the pane still gets a row of its
    /// own and is clipped when drawn.
    #[must_use]
    pub fn compute(words: &[String], inner_width: usize) -> Self {
        let Some(first) = words.first() else {
            return Self::default();
        };
        let word_width = first.width();
        let per_row = if word_width <= inner_width {
            1 + (inner_width - word_width) / (word_width + 1)
        } else {
            1
        };
        Self {
            word_width,
            per_row,
            rows: words.len().div_ceil(per_row),
        }
    }
}

/// Bordered, titled pane showing a word list
#[derive(Debug, Clone)]
pub struct OutputPane {
    area: Rect,
    frame_style: Style,
    inner_style: Style,
    title: String,
    selected: bool,
    words: Vec<String>,
    layout: PaneLayout,
    scroll: usize,
    rendered: Buffer,
}

impl OutputPane {
    #[must_use]
    pub fn new(area: Rect, frame_style: Style, inner_style: Style) -> Self {
        let mut pane = Self {
            area,
            frame_style,
            inner_style,
            title: String::new(),
            selected: false,
            words: Vec::new(),
            layout: PaneLayout::default(),
            scroll: 0,
            rendered: Buffer::empty(Rect::ZERO),
        };
        pane.set_word_list(Vec::new());
        pane
    }

    /// Region inside the border
    #[must_use]
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.area.x.saturating_add(1),
            self.area.y.saturating_add(1),
            self.area.width.saturating_sub(2),
            self.area.height.saturating_sub(2),
        )
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the list, recompute the layout, and scroll back to the top
    pub fn set_word_list(&mut self, words: Vec<String>) {
        let inner = self.inner();
        self.layout = PaneLayout::compute(&words, usize::from(inner.width));
        self.words = words;
        self.scroll = 0;
        self.rendered = self.render_rows(inner.width);
        debug!(
            words = self.words.len(),
            per_row = self.layout.per_row,
            rows = self.layout.rows,
            "result pane laid out"
        );
    }

    fn render_rows(&self, width: u16) -> Buffer {
        let height = u16::try_from(self.layout.rows).unwrap_or(u16::MAX);
        let area = Rect::new(0, 0, width, height);
        let mut rows = Buffer::empty(area);
        fill(&mut rows, area, self.inner_style);
        if self.layout.per_row == 0 {
            return rows;
        }
        for (y, chunk) in (0..height).zip(self.words.chunks(self.layout.per_row)) {
            put_str(&mut rows, 0, y, &chunk.join(" "), self.inner_style);
        }
        rows
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub const fn layout(&self) -> PaneLayout {
        self.layout
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Rows visible at once
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        usize::from(self.inner().height)
    }

    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.layout.rows.saturating_sub(self.visible_rows())
    }

    /// Whether the list is taller than the pane
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.layout.rows > self.visible_rows()
    }

    /// Double border while focused, single otherwise
    fn border_type(&self) -> BorderType {
        if self.selected {
            BorderType::Double
        } else {
            BorderType::Plain
        }
    }

    fn draw_frame(&self, buf: &mut Buffer) {
        Block::bordered()
            .border_type(self.border_type())
            .style(self.frame_style)
            .border_style(self.frame_style)
            .render(self.area, buf);

        let inner_width = usize::from(self.inner().width);
        let title: String = self
            .title
            .chars()
            .take(inner_width.saturating_sub(2))
            .collect();
        put_str(buf, self.area.x + 1, self.area.y, &title, self.frame_style);

        if self.overflows() {
            let right = self.area.right().saturating_sub(1);
            put_str(buf, right, self.area.y, SCROLL_UP, self.frame_style);
            put_str(
                buf,
                right,
                self.area.bottom().saturating_sub(1),
                SCROLL_DOWN,
                self.frame_style,
            );
        }
    }
}

impl Widget for OutputPane {
    fn select(&mut self, focused: bool) {
        self.selected = focused;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn key_input(&mut self, event: InputEvent) -> Command {
        if self.selected && self.overflows() {
            match event {
                InputEvent::SpecialKey(SpecialKey::Up) => {
                    self.scroll = self.scroll.saturating_sub(1);
                }
                InputEvent::SpecialKey(SpecialKey::Down) => {
                    self.scroll = (self.scroll + 1).min(self.max_scroll());
                }
                _ => {}
            }
        }
        Command::None
    }

    fn draw(&self, buf: &mut Buffer) {
        self.draw_frame(buf);

        let inner = self.inner();
        fill(buf, inner, self.inner_style);

        let source = self.rendered.area;
        for row in 0..inner.height {
            let Some(src_y) = u16::try_from(self.scroll + usize::from(row))
                .ok()
                .filter(|&y| y < source.height)
            else {
                break;
            };
            for col in 0..inner.width.min(source.width) {
                let Some(cell) = self.rendered.cell((col, src_y)) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((inner.x + col, inner.y + row)) {
                    *target = cell.clone();
                }
            }
        }
    }
}
