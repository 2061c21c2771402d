//! Presentation and pagination settings shared by the controller and sinks.

use crate::paginator::PageCountRule;

/// Message shown by sinks when a search matches nothing.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No Results Found!";

/// Placeholder text of the search field.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search by name...";

/// Settings for a pagination session.
///
/// The page size is deliberately absent: it is fixed at
/// [`PAGE_SIZE`](crate::PAGE_SIZE) for every session.
///
/// # Examples
///
/// ```rust
/// use roster_pager::config::Config;
/// use roster_pager::paginator::PageCountRule;
///
/// let config = Config::new()
///     .with_page_count_rule(PageCountRule::FloorPlusOne)
///     .with_no_results_message("Nobody here.");
///
/// assert_eq!(config.page_count_rule, PageCountRule::FloorPlusOne);
/// assert_eq!(config.no_results_message, "Nobody here.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How the number of page buttons is derived from the visible count.
    pub page_count_rule: PageCountRule,
    /// Empty-state text rendered when a search has no matches.
    pub no_results_message: String,
    /// Placeholder rendered inside the search field.
    pub search_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_count_rule: PageCountRule::default(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the page-count rule (builder pattern).
    pub fn with_page_count_rule(mut self, rule: PageCountRule) -> Self {
        self.page_count_rule = rule;
        self
    }

    /// Sets the empty-state message (builder pattern).
    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Sets the search placeholder (builder pattern).
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }
}
