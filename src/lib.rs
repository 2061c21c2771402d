#![warn(missing_docs)]

//! # roster-pager
//!
//! Paginated, searchable listings of person records with pluggable renderers.
//!
//! ## Overview
//!
//! A roster is a fixed dataset of [`PersonRecord`]s shown nine at a time,
//! with a row of numbered page buttons and a live name search. The crate
//! keeps three pieces of derived state consistent as the user clicks page
//! buttons and types into the search box:
//!
//! - the **visible set**: records whose name contains the search text
//! - the **active page** of the visible set
//! - the **active button** in the pagination row
//!
//! [`PaginationController`] owns that state and pushes every change to a
//! [`RenderSink`](render::RenderSink). Two sinks ship with the crate:
//!
//! | Sink | Output | Use Case |
//! |------|--------|----------|
//! | [`html::HtmlSink`] | HTML fragments for the student list, page buttons and error label | Web pages |
//! | [`terminal::TerminalSink`] | lipgloss-styled text | Terminal applications |
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_pager::html::HtmlSink;
//! use roster_pager::{Event, PaginationController};
//!
//! let json = r#"[
//!   {"name": {"first": "Anna", "last": "Kim"}, "email": "anna@example.com",
//!    "registered": {"date": "01-02-2015"}, "picture": {"medium": "anna.jpg"}},
//!   {"name": {"first": "Ben", "last": "Ng"}, "email": "ben@example.com",
//!    "registered": {"date": "03-04-2016"}, "picture": {"medium": "ben.jpg"}}
//! ]"#;
//! let dataset = roster_pager::record::from_json_str(json).unwrap();
//!
//! let mut pager = PaginationController::new(&dataset, HtmlSink::new());
//! pager.show();
//!
//! pager.handle(Event::SearchChanged("nomatch".into()));
//! assert_eq!(pager.sink().error_label(), "No Results Found!");
//!
//! pager.handle(Event::SearchChanged("an".into()));
//! assert_eq!(pager.visible().len(), 1);
//! assert_eq!(pager.sink().error_label(), "");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! [`PaginationController::update`] accepts bubbletea-rs messages, either the
//! structured [`PageSelectedMsg`](event::PageSelectedMsg) /
//! [`SearchChangedMsg`](event::SearchChangedMsg) forms or raw key presses:
//!
//! ```rust
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use roster_pager::terminal::TerminalSink;
//! use roster_pager::{PaginationController, PersonRecord};
//!
//! let dataset = vec![PersonRecord::new("Anna", "Kim", "anna@example.com", "2015", "")];
//! let mut pager = PaginationController::new(&dataset, TerminalSink::new());
//!
//! let msg: Msg = Box::new(KeyMsg { key: KeyCode::Char('k'), modifiers: KeyModifiers::NONE });
//! assert!(pager.update(&msg));
//! assert_eq!(pager.search_text(), "k");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod filter;
pub mod html;
pub mod input;
pub mod key;
pub mod paginator;
pub mod record;
pub mod render;
pub mod terminal;

/// Number of records shown per page.
pub const PAGE_SIZE: usize = 9;

pub use config::Config;
pub use controller::PaginationController;
pub use error::{Error, Result};
pub use event::Event;
pub use filter::{filter, FilterState, VisibleSet};
pub use record::{Item, PersonRecord};
pub use render::RenderSink;

/// Prelude module for convenient imports.
///
/// ```rust
/// use roster_pager::prelude::*;
///
/// let dataset: Vec<PersonRecord> = Vec::new();
/// let mut pager = PaginationController::new(&dataset, HtmlSink::new());
/// pager.show();
/// assert_eq!(pager.page_count(), 1);
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::controller::PaginationController;
    pub use crate::event::{Event, PageSelectedMsg, SearchChangedMsg, SearchSubmittedMsg};
    pub use crate::filter::{filter, FilterState, VisibleSet};
    pub use crate::html::HtmlSink;
    pub use crate::paginator::PageCountRule;
    pub use crate::record::{Item, PersonRecord};
    pub use crate::render::RenderSink;
    pub use crate::terminal::TerminalSink;
    pub use crate::PAGE_SIZE;
}
