//! HTML rendering of a roster page.
//!
//! [`HtmlSink`] keeps the three dynamic regions of the roster page as HTML
//! fragments, each replaced wholesale on every render call:
//!
//! - the **student list** (`ul.student-list` contents): one
//!   `li.student-item` card per record on the active page
//! - the **link list** (`ul.link-list` contents): one page button per page,
//!   the active one carrying `class="active"`
//! - the **error label** (`#error` contents): the no-results message, or empty
//!
//! The host page is expected to swap these into its document and to report
//! button clicks and search keystrokes back as [`Event`](crate::Event)s,
//! e.g. via [`Event::from_page_label`](crate::Event::from_page_label) with the
//! clicked button's text.
//!
//! All record text is escaped with [`html_escape::encode_quoted_attribute`]
//! before it is interpolated. Only `&`, `<`, `>`, `"` and `'` are replaced,
//! so the text is safe in both element and attribute positions and reads
//! unchanged otherwise.

use html_escape::encode_quoted_attribute as escape;

use crate::config::Config;
use crate::record::PersonRecord;
use crate::render::RenderSink;

/// Render sink producing the roster page's HTML fragments.
///
/// # Examples
///
/// ```rust
/// use roster_pager::html::HtmlSink;
/// use roster_pager::render::RenderSink;
/// use roster_pager::PersonRecord;
///
/// let mut sink = HtmlSink::new();
/// sink.render_page_buttons(2, 2);
/// assert_eq!(
///     sink.link_list(),
///     "<li><button type=\"button\">1</button></li>\
///      <li><button type=\"button\" class=\"active\">2</button></li>"
/// );
///
/// sink.render_items(&[], true);
/// assert_eq!(sink.student_list(), "");
/// assert_eq!(sink.error_label(), "No Results Found!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlSink {
    student_list: String,
    link_list: String,
    error_label: String,
    config: Config,
}

impl HtmlSink {
    /// Creates an empty sink using the default [`Config`] strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink using the strings of `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            config: config.clone(),
            ..Self::default()
        }
    }

    /// Inner HTML of the `ul.student-list` element.
    pub fn student_list(&self) -> &str {
        &self.student_list
    }

    /// Inner HTML of the `ul.link-list` pagination element.
    pub fn link_list(&self) -> &str {
        &self.link_list
    }

    /// Text of the `#error` label: the no-results message or empty.
    pub fn error_label(&self) -> &str {
        &self.error_label
    }

    /// The search header: error label, search input and search button.
    pub fn search_bar(&self) -> String {
        format!(
            "<label id=\"error\">{}</label>\
             <label for=\"search\" class=\"student-search\">\
             <input id=\"search\" placeholder=\"{}\">\
             <button type=\"button\"><img src=\"img/icn-search.svg\" alt=\"Search icon\"></button>\
             </label>",
            escape(&self.error_label),
            escape(&self.config.search_placeholder),
        )
    }

    /// The complete page body: header with search bar, student list and
    /// pagination.
    pub fn page(&self) -> String {
        format!(
            "<header class=\"header\"><h2>Students</h2>{}</header>\
             <ul class=\"student-list\">{}</ul>\
             <div class=\"pagination\"><ul class=\"link-list\">{}</ul></div>",
            self.search_bar(),
            self.student_list,
            self.link_list,
        )
    }
}

impl RenderSink<PersonRecord> for HtmlSink {
    fn render_items(&mut self, records: &[&PersonRecord], no_results: bool) {
        self.student_list = records.iter().map(|r| student_item(r)).collect();
        self.error_label = if no_results {
            self.config.no_results_message.clone()
        } else {
            String::new()
        };
    }

    fn render_page_buttons(&mut self, count: usize, active: usize) {
        self.link_list = (1..=count).map(|n| page_button(n, n == active)).collect();
    }

    fn configure(&mut self, config: &Config) {
        self.config = config.clone();
    }
}

/// The `li.student-item` card for one record.
pub fn student_item(record: &PersonRecord) -> String {
    format!(
        "<li class=\"student-item cf\">\
         <div class=\"student-details\">\
         <img class=\"avatar\" src=\"{}\" alt=\"Profile Picture\">\
         <h3>{}</h3>\
         <span class=\"email\">{}</span>\
         </div>\
         <div class=\"joined-details\">\
         <span class=\"date\">Joined {}</span>\
         </div>\
         </li>",
        escape(record.avatar_url()),
        escape(&record.display_name()),
        escape(record.email()),
        escape(record.registered_date()),
    )
}

/// One pagination button labelled `page`.
pub fn page_button(page: usize, active: bool) -> String {
    let class = if active { " class=\"active\"" } else { "" };
    format!("<li><button type=\"button\"{}>{}</button></li>", class, page)
}
