//! TUI application state and event loop

use super::event::{Command, InputEvent, SpecialKey};
use super::focus::FocusRing;
use super::palette::{Palette, StyleId};
use super::preflight::{SessionAbort, TerminalCaps};
use super::widgets::{Button, InputField, OutputPane, Widget, fill, put_str};
use crate::core::{Dictionary, Mask};
use crate::matcher::Matcher;
use crate::output::prompt::wait_for_enter;
use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Style};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const FIELD_COLUMN: u16 = 16;
const FIELD_WIDTH: u16 = 12;
const BUTTON_WIDTH: u16 = 14;

/// Identifies each control on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    Letters,
    Mask,
    Results,
    Search,
    Exit,
}

impl WidgetId {
    /// Order widgets are drawn in and receive events in
    pub const DRAW_ORDER: [Self; 5] = [
        Self::Letters,
        Self::Mask,
        Self::Results,
        Self::Search,
        Self::Exit,
    ];
}

/// What the event loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
    Abort(SessionAbort),
}

/// Application state
pub struct App {
    dictionary: Dictionary,
    /// File the dictionary was loaded from, read again on Ctrl+R
    source: Option<PathBuf>,
    matcher: Matcher,
    area: Rect,
    main_style: Style,
    letters: InputField,
    mask: InputField,
    results: OutputPane,
    search: Button,
    exit: Button,
    focus: FocusRing<WidgetId>,
}

impl App {
    /// Lay out the screen for a `width` x `height` terminal
    #[must_use]
    pub fn new(
        dictionary: Dictionary,
        matcher: Matcher,
        palette: &Palette,
        width: u16,
        height: u16,
    ) -> Self {
        let field = palette.style(StyleId::Field);
        let letters = InputField::new(FIELD_COLUMN, 1, FIELD_WIDTH, field, false);
        let mask = InputField::new(FIELD_COLUMN, 3, FIELD_WIDTH, field, true);

        let mut results = OutputPane::new(
            Rect::new(1, 5, width.saturating_sub(2), height.saturating_sub(8)),
            palette.style(StyleId::WindowFrame),
            palette.style(StyleId::Window),
        );
        results.set_title(found_title(0));

        let bottom = height.saturating_sub(2);
        let search = Button::new(
            1,
            bottom,
            BUTTON_WIDTH,
            "Search",
            palette.style(StyleId::Button),
            Command::Search,
        );
        let exit = Button::new(
            width.saturating_sub(BUTTON_WIDTH + 1),
            bottom,
            BUTTON_WIDTH,
            "Exit",
            palette.style(StyleId::ExitButton),
            Command::Exit,
        );

        let focus = FocusRing::new(
            WidgetId::Letters,
            [
                WidgetId::Mask,
                WidgetId::Results,
                WidgetId::Search,
                WidgetId::Exit,
            ],
        );

        let mut app = Self {
            dictionary,
            source: None,
            matcher,
            area: Rect::new(0, 0, width, height),
            main_style: palette.style(StyleId::Main),
            letters,
            mask,
            results,
            search,
            exit,
            focus,
        };
        let first = app.focus.current();
        app.widget_mut(first).select(true);
        app
    }

    #[must_use]
    pub fn widget(&self, id: WidgetId) -> &dyn Widget {
        match id {
            WidgetId::Letters => &self.letters,
            WidgetId::Mask => &self.mask,
            WidgetId::Results => &self.results,
            WidgetId::Search => &self.search,
            WidgetId::Exit => &self.exit,
        }
    }

    fn widget_mut(&mut self, id: WidgetId) -> &mut dyn Widget {
        match id {
            WidgetId::Letters => &mut self.letters,
            WidgetId::Mask => &mut self.mask,
            WidgetId::Results => &mut self.results,
            WidgetId::Search => &mut self.search,
            WidgetId::Exit => &mut self.exit,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> &FocusRing<WidgetId> {
        &self.focus
    }

    #[must_use]
    pub const fn results(&self) -> &OutputPane {
        &self.results
    }

    #[must_use]
    pub fn letters(&self) -> &str {
        self.letters.text()
    }

    #[must_use]
    pub fn mask(&self) -> &str {
        self.mask.text()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Remember the word list file so it can be reloaded
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Read the word list file again; later searches use only the new words
    ///
    /// A failed reload keeps the current words. Either way the outcome shows
    /// in the result pane title.
    fn reload_dictionary(&mut self) {
        let Some(path) = &self.source else {
            return;
        };
        match self.dictionary.reload(path) {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    words = self.dictionary.len(),
                    "dictionary reloaded"
                );
                self.results
                    .set_title(format!("Reloaded ({} words)", self.dictionary.len()));
            }
            Err(err) => {
                warn!(error = %err, "dictionary reload failed");
                self.results.set_title("Reload failed");
            }
        }
    }

    /// Handle one input event
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::SpecialKey(SpecialKey::Tab) => {
                let (previous, current) = self.focus.advance();
                self.widget_mut(previous).select(false);
                self.widget_mut(current).select(true);
                debug!(focus = ?current, "focus moved");
                Flow::Continue
            }
            InputEvent::Resize => Flow::Abort(SessionAbort::Resized),
            InputEvent::SpecialKey(SpecialKey::Interrupt) => Flow::Exit,
            InputEvent::SpecialKey(SpecialKey::Reload) => {
                self.reload_dictionary();
                Flow::Continue
            }
            _ => {
                let mut reported = Vec::with_capacity(WidgetId::DRAW_ORDER.len());
                for id in WidgetId::DRAW_ORDER {
                    reported.push(self.widget_mut(id).key_input(event));
                }
                match Command::reduce(reported) {
                    Command::None => Flow::Continue,
                    Command::Search => {
                        self.run_search();
                        Flow::Continue
                    }
                    Command::Exit => Flow::Exit,
                }
            }
        }
    }

    fn run_search(&mut self) {
        let mask = Mask::parse(self.mask.text());
        let words = self
            .matcher
            .find(self.letters.text(), &mask, &self.dictionary);
        info!(
            letters = self.letters.text(),
            mask = %mask,
            found = words.len(),
            "search"
        );
        self.results.set_title(found_title(words.len()));
        self.results.set_word_list(words);
    }

    /// Draw the whole screen
    pub fn render(&self, buf: &mut Buffer) {
        fill(buf, self.area, self.main_style);
        put_str(buf, 1, 1, "Letters", self.main_style);
        put_str(buf, 1, 3, "Mask", self.main_style);
        for id in WidgetId::DRAW_ORDER {
            self.widget(id).draw(buf);
        }
    }
}

fn found_title(count: usize) -> String {
    format!("Found words ({count})")
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    Aborted(SessionAbort),
}

/// Run the TUI application
///
/// Checks the terminal first; if it is unsuitable the reason is printed and
/// no interface is drawn. The terminal is restored before any message is
/// printed, whatever way the session ends.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(dictionary: Dictionary, matcher: Matcher, source: PathBuf) -> Result<()> {
    let caps = TerminalCaps::probe()?;
    let palette = match caps.check() {
        Ok(palette) => palette,
        Err(abort) => return report_abort(abort),
    };
    info!(
        width = caps.width,
        height = caps.height,
        colors = caps.colors,
        palette = ?palette.kind(),
        "starting interactive session"
    );

    let app = App::new(dictionary, matcher, &palette, caps.width, caps.height).with_source(source);

    let mut terminal = init_terminal()?;
    let res = run_app(&mut terminal, app);
    restore_terminal(&mut terminal)?;

    match res? {
        SessionEnd::Exit => Ok(()),
        SessionEnd::Aborted(abort) => report_abort(abort),
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

fn report_abort(abort: SessionAbort) -> Result<()> {
    warn!(reason = ?abort, "interactive session aborted");
    println!("{abort}");
    wait_for_enter("Press Enter to exit.")?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionEnd> {
    loop {
        terminal.draw(|f| app.render(f.buffer_mut()))?;

        let event = InputEvent::from_crossterm(&event::read()?);
        match app.handle_event(event) {
            Flow::Continue => {}
            Flow::Exit => return Ok(SessionEnd::Exit),
            Flow::Abort(abort) => return Ok(SessionEnd::Aborted(abort)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodepointCollation;
    use crate::interactive::widgets::test_support::row_text;

    const WIDTH: u16 = 40;
    const HEIGHT: u16 = 14;

    fn app_with(words: &[&str]) -> App {
        App::new(
            Dictionary::from_words(words.iter().copied()),
            Matcher::new(Box::new(CodepointCollation)),
            &Palette::basic(),
            WIDTH,
            HEIGHT,
        )
    }

    fn app() -> App {
        app_with(&["cat", "act", "tac", "dog"])
    }

    fn tab(app: &mut App) -> Flow {
        app.handle_event(InputEvent::SpecialKey(SpecialKey::Tab))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            assert_eq!(app.handle_event(InputEvent::Character(ch)), Flow::Continue);
        }
    }

    fn focus_on(app: &mut App, id: WidgetId) {
        while app.focus().current() != id {
            tab(app);
        }
    }

    fn selected(app: &App) -> Vec<WidgetId> {
        WidgetId::DRAW_ORDER
            .into_iter()
            .filter(|&id| app.widget(id).is_selected())
            .collect()
    }

    fn enter(app: &mut App) -> Flow {
        app.handle_event(InputEvent::SpecialKey(SpecialKey::Enter))
    }

    #[test]
    fn starts_with_letters_focused() {
        let app = app();
        assert_eq!(app.focus().current(), WidgetId::Letters);
        assert_eq!(selected(&app), [WidgetId::Letters]);
        assert_eq!(app.results().title(), "Found words (0)");
    }

    #[test]
    fn tab_cycles_focus_with_one_selected_widget() {
        let mut app = app();
        let ring_len = app.focus().len();
        assert_eq!(ring_len, 5);

        for n in 1..=12 {
            assert_eq!(tab(&mut app), Flow::Continue);
            assert_eq!(app.focus().current_index(), n % ring_len);
            assert_eq!(selected(&app), [app.focus().current()]);
        }
    }

    #[test]
    fn typing_goes_to_the_focused_field_only() {
        let mut app = app();
        type_text(&mut app, "Tac*");
        tab(&mut app);
        type_text(&mut app, "*A*");

        assert_eq!(app.letters(), "tac");
        assert_eq!(app.mask(), "*a*");
    }

    #[test]
    fn search_button_fills_results() {
        let mut app = app();
        type_text(&mut app, "tac");
        tab(&mut app);
        type_text(&mut app, "*a*");
        focus_on(&mut app, WidgetId::Search);

        assert_eq!(enter(&mut app), Flow::Continue);
        assert_eq!(app.results().words(), ["cat", "tac"]);
        assert_eq!(app.results().title(), "Found words (2)");
        assert_eq!(app.results().scroll_offset(), 0);
    }

    #[test]
    fn space_also_activates() {
        let mut app = app();
        type_text(&mut app, "tac");
        tab(&mut app);
        type_text(&mut app, "***");
        focus_on(&mut app, WidgetId::Search);

        app.handle_event(InputEvent::Character(' '));
        assert_eq!(app.results().words(), ["act", "cat", "tac"]);
    }

    #[test]
    fn mask_longer_than_letters_finds_nothing() {
        let mut app = app();
        type_text(&mut app, "ta");
        tab(&mut app);
        type_text(&mut app, "***");
        focus_on(&mut app, WidgetId::Search);

        enter(&mut app);
        assert!(app.results().words().is_empty());
        assert_eq!(app.results().title(), "Found words (0)");
    }

    #[test]
    fn enter_on_a_field_does_nothing() {
        let mut app = app();
        type_text(&mut app, "tac");
        assert_eq!(enter(&mut app), Flow::Continue);
        assert!(app.results().words().is_empty());
    }

    #[test]
    fn exit_button_ends_the_session() {
        let mut app = app();
        focus_on(&mut app, WidgetId::Exit);
        assert_eq!(enter(&mut app), Flow::Exit);
    }

    #[test]
    fn interrupt_ends_the_session_from_anywhere() {
        let mut app = app();
        assert_eq!(
            app.handle_event(InputEvent::SpecialKey(SpecialKey::Interrupt)),
            Flow::Exit
        );
    }

    #[test]
    fn resize_aborts() {
        let mut app = app();
        assert_eq!(
            app.handle_event(InputEvent::Resize),
            Flow::Abort(SessionAbort::Resized)
        );
    }

    #[test]
    fn focused_results_scroll_within_bounds() {
        let words: Vec<String> = (0..200).map(|i| format!("{i:03}")).collect();
        let mut app = App::new(
            Dictionary::default(),
            Matcher::new(Box::new(CodepointCollation)),
            &Palette::basic(),
            WIDTH,
            HEIGHT,
        );
        app.results.set_word_list(words);
        focus_on(&mut app, WidgetId::Results);

        for _ in 0..500 {
            app.handle_event(InputEvent::SpecialKey(SpecialKey::Down));
        }
        assert_eq!(app.results().scroll_offset(), app.results().max_scroll());
        for _ in 0..500 {
            app.handle_event(InputEvent::SpecialKey(SpecialKey::Up));
        }
        assert_eq!(app.results().scroll_offset(), 0);
    }

    fn reload(app: &mut App) -> Flow {
        app.handle_event(InputEvent::SpecialKey(SpecialKey::Reload))
    }

    #[test]
    fn reload_replaces_the_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat\nact\ntac\n").unwrap();

        let mut app = App::new(
            Dictionary::load(&path).unwrap(),
            Matcher::new(Box::new(CodepointCollation)),
            &Palette::basic(),
            WIDTH,
            HEIGHT,
        )
        .with_source(&path);
        type_text(&mut app, "tac");
        tab(&mut app);
        type_text(&mut app, "***");
        focus_on(&mut app, WidgetId::Search);
        enter(&mut app);
        assert_eq!(app.results().words(), ["act", "cat", "tac"]);

        std::fs::write(&path, "act\ndog\n").unwrap();
        assert_eq!(reload(&mut app), Flow::Continue);
        assert_eq!(app.results().title(), "Reloaded (2 words)");
        assert_eq!(app.dictionary().len(), 2);

        enter(&mut app);
        assert_eq!(app.results().words(), ["act"]);
    }

    #[test]
    fn failed_reload_keeps_the_old_words() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app().with_source(dir.path().join("missing.txt"));

        assert_eq!(reload(&mut app), Flow::Continue);
        assert_eq!(app.results().title(), "Reload failed");
        assert_eq!(app.dictionary().len(), 4);
    }

    #[test]
    fn reload_without_a_source_does_nothing() {
        let mut app = app();
        assert_eq!(reload(&mut app), Flow::Continue);
        assert_eq!(app.results().title(), "Found words (0)");
        assert_eq!(app.dictionary().len(), 4);
    }

    #[test]
    fn altgr_letters_reach_the_field() {
        let mut app = app();
        type_text(&mut app, "łą");
        assert_eq!(app.letters(), "łą");
    }

    #[test]
    fn focused_results_pane_is_marked() {
        let mut app = app();
        let mut before = Buffer::empty(Rect::new(0, 0, WIDTH, HEIGHT));
        app.render(&mut before);
        assert!(row_text(&before, 5).starts_with(" ┌"));

        focus_on(&mut app, WidgetId::Results);
        let mut after = Buffer::empty(Rect::new(0, 0, WIDTH, HEIGHT));
        app.render(&mut after);
        assert!(row_text(&after, 5).starts_with(" ╔"));
        assert!(row_text(&after, HEIGHT - 4).starts_with(" ╚"));
    }

    #[test]
    fn renders_labels_and_buttons() {
        let app = app();
        let mut buf = Buffer::empty(Rect::new(0, 0, WIDTH, HEIGHT));
        app.render(&mut buf);

        assert!(row_text(&buf, 1).contains("Letters"));
        assert!(row_text(&buf, 1).contains('_'));
        assert!(row_text(&buf, 3).contains("Mask"));
        assert!(row_text(&buf, 5).contains("Found words (0)"));
        assert!(row_text(&buf, HEIGHT - 2).contains("Search"));
        assert!(row_text(&buf, HEIGHT - 2).contains("Exit"));
    }

    #[test]
    fn renders_at_minimum_size_and_into_a_smaller_buffer() {
        let app = App::new(
            Dictionary::default(),
            Matcher::new(Box::new(CodepointCollation)),
            &Palette::rich(),
            31,
            11,
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 31, 11));
        app.render(&mut buf);
        assert!(row_text(&buf, 9).contains("Exit"));

        let mut small = Buffer::empty(Rect::new(0, 0, 20, 6));
        app.render(&mut small);
        assert!(row_text(&small, 1).starts_with(" Letters"));
    }
}
