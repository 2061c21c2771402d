//! A minimal search field that turns key presses into search events.
//!
//! This is the thin input layer between a terminal and the controller: it
//! owns the raw text being typed and reports every edit as an
//! [`Event::SearchChanged`], the way a browser search box fires on every
//! keyup.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::event::Event;

/// Editable single-line search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchField {
    value: String,
}

impl SearchField {
    /// Creates an empty search field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text without producing an event.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Empties the field.
    ///
    /// Returns a [`Event::SearchChanged`] if there was text to remove.
    pub fn clear(&mut self) -> Option<Event> {
        if self.value.is_empty() {
            return None;
        }
        self.value.clear();
        Some(Event::SearchChanged(String::new()))
    }

    /// Applies an editing key.
    ///
    /// Printable characters are appended and Backspace removes the last
    /// character. Characters typed with Ctrl or Alt held are not text and are
    /// ignored. Returns the resulting [`Event::SearchChanged`], or `None` when
    /// the key did not change the text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    /// use roster_pager::input::SearchField;
    /// use roster_pager::Event;
    ///
    /// let mut field = SearchField::new();
    /// let press = |c| KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE };
    ///
    /// field.handle_key(&press('a'));
    /// let event = field.handle_key(&press('n'));
    /// assert_eq!(event, Some(Event::SearchChanged("an".to_string())));
    /// ```
    pub fn handle_key(&mut self, key: &KeyMsg) -> Option<Event> {
        match key.key {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.value.push(c);
            }
            KeyCode::Backspace => {
                self.value.pop()?;
            }
            _ => return None,
        }
        Some(Event::SearchChanged(self.value.clone()))
    }
}
