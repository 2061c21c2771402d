//! Key bindings for driving a pager from the keyboard.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A set of keys that trigger one action, with help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Keys that trigger the binding.
    pub keys: Vec<KeyCode>,
    /// Short key label, e.g. `"pgdn"`.
    pub help: String,
    /// What the binding does, e.g. `"next page"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding for `keys` with no help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the key label (builder pattern).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the action description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if `key` is one of this binding's keys.
    pub fn matches(&self, key: &KeyMsg) -> bool {
        self.keys.contains(&key.key)
    }
}

/// Keyboard bindings used by
/// [`PaginationController::update`](crate::controller::PaginationController::update).
///
/// Printable characters always go to the search field, so page navigation
/// is bound to non-printing keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerKeyMap {
    /// Select the previous page.
    pub prev_page: Binding,
    /// Select the next page.
    pub next_page: Binding,
    /// Re-run the current search.
    pub submit_search: Binding,
    /// Empty the search field.
    pub clear_search: Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(vec![KeyCode::PageUp])
                .with_help("pgup")
                .with_description("prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown])
                .with_help("pgdn")
                .with_description("next page"),
            submit_search: Binding::new(vec![KeyCode::Enter])
                .with_help("enter")
                .with_description("search"),
            clear_search: Binding::new(vec![KeyCode::Esc])
                .with_help("esc")
                .with_description("clear search"),
        }
    }
}

impl PagerKeyMap {
    /// All bindings, in help display order.
    pub fn bindings(&self) -> Vec<&Binding> {
        vec![
            &self.prev_page,
            &self.next_page,
            &self.submit_search,
            &self.clear_search,
        ]
    }

    /// One-line help such as `"pgup prev page • pgdn next page • ..."`.
    pub fn short_help(&self) -> String {
        self.bindings()
            .iter()
            .map(|b| format!("{} {}", b.help, b.description))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
