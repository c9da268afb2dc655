//! Input events and the commands widgets report back
//!
//! Raw crossterm events are classified once, here, into [`InputEvent`].
//! Nothing past this point looks at crossterm types.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Non-character keys the interface reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Tab,
    Enter,
    Backspace,
    Up,
    Down,
    /// Ctrl+C
    Interrupt,
    /// Ctrl+R, read the word list file again
    Reload,
    Other,
}

/// One classified input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Character(char),
    SpecialKey(SpecialKey),
    /// The terminal changed size
    Resize,
    /// Anything else (mouse, focus, key release, paste)
    None,
}

impl InputEvent {
    /// Classify a crossterm event
    #[must_use]
    pub fn from_crossterm(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(_, _) => Self::Resize,
            _ => Self::None,
        }
    }

    fn from_key(key: &KeyEvent) -> Self {
        // Only presses count (Windows also reports releases)
        if key.kind == KeyEventKind::Release {
            return Self::None;
        }

        // AltGr arrives as Ctrl+Alt on Windows; those are typed characters
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return match key.code {
                KeyCode::Char('c') => Self::SpecialKey(SpecialKey::Interrupt),
                KeyCode::Char('r') => Self::SpecialKey(SpecialKey::Reload),
                // Ctrl+J is a line feed, Ctrl+M a carriage return
                KeyCode::Char('j' | 'm') => Self::SpecialKey(SpecialKey::Enter),
                KeyCode::Char('h') => Self::SpecialKey(SpecialKey::Backspace),
                KeyCode::Char('i') => Self::SpecialKey(SpecialKey::Tab),
                _ => Self::SpecialKey(SpecialKey::Other),
            };
        }

        match key.code {
            KeyCode::Char('\t') | KeyCode::Tab => Self::SpecialKey(SpecialKey::Tab),
            KeyCode::Char('\r' | '\n') | KeyCode::Enter => Self::SpecialKey(SpecialKey::Enter),
            KeyCode::Char(c) => Self::Character(c),
            KeyCode::Backspace => Self::SpecialKey(SpecialKey::Backspace),
            KeyCode::Up => Self::SpecialKey(SpecialKey::Up),
            KeyCode::Down => Self::SpecialKey(SpecialKey::Down),
            _ => Self::SpecialKey(SpecialKey::Other),
        }
    }

    /// Enter, line feed, or Space
    #[must_use]
    pub const fn is_activate(self) -> bool {
        matches!(
            self,
            Self::SpecialKey(SpecialKey::Enter) | Self::Character(' ')
        )
    }
}

/// Top-level command reported by a widget
///
/// Ordered by priority: when several widgets report something for the same
/// event, the highest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Command {
    #[default]
    None,
    Search,
    Exit,
}

impl Command {
    /// Keep the highest-priority command
    ///
    /// # Examples
    /// ```
    /// use word_finder::interactive::Command;
    ///
    /// let all = [Command::None, Command::Exit, Command::Search];
    /// assert_eq!(Command::reduce(all), Command::Exit);
    /// assert_eq!(Command::reduce([]), Command::None);
    /// ```
    pub fn reduce<I: IntoIterator<Item = Self>>(commands: I) -> Self {
        commands.into_iter().fold(Self::None, Self::max)
    }
}
