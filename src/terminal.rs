//! Styled terminal rendering of a roster page.
//!
//! [`TerminalSink`] renders the active page as aligned columns (name, email,
//! joined date) followed by a row of page numbers, the active one bracketed:
//!
//! ```text
//! Ethel Dean      ethel.dean@example.com Joined 12-15-2005
//! Lorenzo Ouellet lorenzo@example.com    Joined 07-04-2013
//!
//! 1 [2] 3
//! ```
//!
//! Columns are aligned by display width, so wide characters in names keep
//! the table straight.

use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::record::PersonRecord;
use crate::render::RenderSink;

/// Styles for each element of the terminal roster.
#[derive(Debug, Clone)]
pub struct PagerStyles {
    /// Display name column.
    pub name: Style,
    /// Email column.
    pub email: Style,
    /// Joined-date column.
    pub date: Style,
    /// Empty-state message.
    pub no_results: Style,
    /// The active page number.
    pub active_page: Style,
    /// Every other page number.
    pub inactive_page: Style,
}

impl Default for PagerStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            name: Style::new().bold(true),
            email: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            date: Style::new().foreground(subdued_color.clone()),
            no_results: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            active_page: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            inactive_page: Style::new().foreground(subdued_color),
        }
    }
}

/// Render sink producing styled terminal text.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    items_view: String,
    buttons_view: String,
    /// Styles applied when rendering.
    pub styles: PagerStyles,
    no_results_message: String,
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl TerminalSink {
    /// Creates an empty sink with default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink using the no-results message of `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            items_view: String::new(),
            buttons_view: String::new(),
            styles: PagerStyles::default(),
            no_results_message: config.no_results_message.clone(),
        }
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: PagerStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The rendered item table, or the empty-state line.
    pub fn items_view(&self) -> &str {
        &self.items_view
    }

    /// The rendered page-number row.
    pub fn buttons_view(&self) -> &str {
        &self.buttons_view
    }

    /// The item table and page row, separated by a blank line.
    pub fn view(&self) -> String {
        format!("{}\n\n{}", self.items_view, self.buttons_view)
    }

    fn render_row(&self, record: &PersonRecord, name_width: usize, email_width: usize) -> String {
        let name = record.display_name();
        let email = record.email();
        format!(
            "{}{} {}{} {}",
            self.styles.name.clone().inline(true).render(&name),
            padding(&name, name_width),
            self.styles.email.clone().inline(true).render(email),
            padding(email, email_width),
            self.styles
                .date
                .clone()
                .inline(true)
                .render(&format!("Joined {}", record.registered_date())),
        )
    }
}

impl RenderSink<PersonRecord> for TerminalSink {
    fn render_items(&mut self, records: &[&PersonRecord], no_results: bool) {
        if no_results {
            self.items_view = self
                .styles
                .no_results
                .clone()
                .inline(true)
                .render(&self.no_results_message);
            return;
        }

        let name_width = records
            .iter()
            .map(|r| r.display_name().width())
            .max()
            .unwrap_or(0);
        let email_width = records.iter().map(|r| r.email().width()).max().unwrap_or(0);

        self.items_view = records
            .iter()
            .map(|r| self.render_row(r, name_width, email_width))
            .collect::<Vec<_>>()
            .join("\n");
    }

    fn render_page_buttons(&mut self, count: usize, active: usize) {
        self.buttons_view = (1..=count)
            .map(|n| {
                if n == active {
                    self.styles.active_page.clone().inline(true).render(&format!("[{}]", n))
                } else {
                    self.styles.inactive_page.clone().inline(true).render(&n.to_string())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
    }

    fn configure(&mut self, config: &Config) {
        self.no_results_message = config.no_results_message.clone();
    }
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}
