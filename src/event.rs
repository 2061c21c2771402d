//! Structured input events and their bubbletea-rs message forms.
//!
//! Platform layers translate raw input (clicks, keystrokes) into these
//! events. The controller consumes them either directly through
//! [`handle`](crate::controller::PaginationController::handle) or as
//! bubbletea-rs messages through
//! [`update`](crate::controller::PaginationController::update).

use crate::error::{Error, Result};

/// An input the pagination controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A page button was activated. Carries the 1-based page number.
    PageSelected(usize),
    /// The search field's text changed.
    SearchChanged(String),
    /// The search was explicitly submitted (search button or Enter).
    SearchSubmitted,
}

impl Event {
    /// Builds a [`Event::PageSelected`] from a rendered button label.
    ///
    /// Surrounding whitespace is ignored. Out-of-range numbers are accepted
    /// here and clamped by the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageLabel`] if the label is not a decimal number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roster_pager::Event;
    ///
    /// assert_eq!(Event::from_page_label(" 3 ").unwrap(), Event::PageSelected(3));
    /// assert!(Event::from_page_label("next").is_err());
    /// ```
    pub fn from_page_label(label: &str) -> Result<Self> {
        label
            .trim()
            .parse::<usize>()
            .map(Event::PageSelected)
            .map_err(|_| Error::InvalidPageLabel(label.to_string()))
    }
}

/// Message form of [`Event::PageSelected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelectedMsg(pub usize);

/// Message form of [`Event::SearchChanged`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchChangedMsg(pub String);

/// Message form of [`Event::SearchSubmitted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSubmittedMsg;

impl From<PageSelectedMsg> for Event {
    fn from(msg: PageSelectedMsg) -> Self {
        Event::PageSelected(msg.0)
    }
}

impl From<SearchChangedMsg> for Event {
    fn from(msg: SearchChangedMsg) -> Self {
        Event::SearchChanged(msg.0)
    }
}

impl From<SearchSubmittedMsg> for Event {
    fn from(_: SearchSubmittedMsg) -> Self {
        Event::SearchSubmitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label_parsing() {
        assert_eq!(Event::from_page_label("1").unwrap(), Event::PageSelected(1));
        assert_eq!(Event::from_page_label("\n 12\t").unwrap(), Event::PageSelected(12));
        assert_eq!(Event::from_page_label("0").unwrap(), Event::PageSelected(0));
    }

    #[test]
    fn test_invalid_page_labels() {
        for label in ["", "-1", "two", "1.5", "<b>2</b>"] {
            match Event::from_page_label(label) {
                Err(Error::InvalidPageLabel(l)) => assert_eq!(l, label),
                other => panic!("expected InvalidPageLabel for {:?}, got {:?}", label, other),
            }
        }
    }

    #[test]
    fn test_messages_convert_to_events() {
        assert_eq!(Event::from(PageSelectedMsg(2)), Event::PageSelected(2));
        assert_eq!(
            Event::from(SearchChangedMsg("ann".into())),
            Event::SearchChanged("ann".into())
        );
        assert_eq!(Event::from(SearchSubmittedMsg), Event::SearchSubmitted);
    }
}
