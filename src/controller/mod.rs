//! The pagination controller: search text, active page, and rendering kept in sync.
//!
//! ## Architecture Overview
//!
//! A controller owns the only mutable state of a session: the applied search
//! text, the visible set it produces, and the active page. Every input runs
//! to completion in one call:
//!
//! 1. **Filter** the borrowed dataset with the search text
//! 2. **Paginate** the visible set at [`PAGE_SIZE`](crate::PAGE_SIZE) items per page
//! 3. **Clamp** the active page into `1..=page_count`
//! 4. **Dispatch** the result to the [`RenderSink`]
//!
//! ### Input handling
//! - A search change always resets to page 1 and re-renders both the item
//!   list and the page-button row, since the number of buttons may change.
//! - A page selection never touches the search text or the visible set. It
//!   re-renders the items and re-issues the button row with the same count
//!   so the sink can move the active marker.
//! - Out-of-range page numbers are clamped, never rejected.

use bubbletea_rs::{KeyMsg, Msg};

use crate::config::Config;
use crate::event::{Event, PageSelectedMsg, SearchChangedMsg, SearchSubmittedMsg};
use crate::filter::{filter, VisibleSet};
use crate::input::SearchField;
use crate::key::PagerKeyMap;
use crate::paginator;
use crate::record::Item;
use crate::render::RenderSink;
use crate::PAGE_SIZE;

#[cfg(test)]
mod tests;

/// Keeps a filtered, paginated view of a dataset synchronized with a render sink.
///
/// # Examples
///
/// ```rust
/// use roster_pager::html::HtmlSink;
/// use roster_pager::{PaginationController, PersonRecord};
///
/// let dataset: Vec<PersonRecord> = (0..20)
///     .map(|i| PersonRecord::new(format!("Student{}", i), "Doe", "s@example.com", "2020", "a.jpg"))
///     .collect();
///
/// let mut pager = PaginationController::new(&dataset, HtmlSink::new());
/// pager.show();
/// assert_eq!(pager.page_count(), 3);
///
/// pager.on_page_selected(3);
/// assert_eq!(pager.current_page_items().len(), 2);
/// assert!(pager.sink().link_list().contains(r#"<button type="button" class="active">3</button>"#));
///
/// pager.on_search_changed("student1");
/// assert_eq!(pager.active_page(), 1);
/// assert_eq!(pager.visible().len(), 11); // Student1, Student10..Student19
/// ```
pub struct PaginationController<'a, I, S> {
    dataset: &'a [I],
    search_text: String,
    visible: VisibleSet<'a, I>,
    paginator: paginator::Model,
    search_field: SearchField,
    keymap: PagerKeyMap,
    config: Config,
    sink: S,
}

impl<'a, I: Item, S: RenderSink<I>> PaginationController<'a, I, S> {
    /// Creates a controller over `dataset` with the default [`Config`].
    ///
    /// The sink keeps whatever strings it was built with. Nothing is
    /// rendered until [`show`](Self::show) or an input event.
    pub fn new(dataset: &'a [I], sink: S) -> Self {
        Self::build(dataset, sink, Config::default())
    }

    /// Creates a controller over `dataset` with an explicit configuration.
    ///
    /// `config` is handed to the sink through [`RenderSink::configure`], so
    /// its presentation strings replace the sink's own.
    pub fn with_config(dataset: &'a [I], mut sink: S, config: Config) -> Self {
        sink.configure(&config);
        Self::build(dataset, sink, config)
    }

    fn build(dataset: &'a [I], sink: S, config: Config) -> Self {
        let paginator = paginator::Model::new()
            .with_per_page(PAGE_SIZE)
            .with_rule(config.page_count_rule)
            .with_total_items(dataset.len());

        Self {
            dataset,
            search_text: String::new(),
            visible: VisibleSet::all(dataset),
            paginator,
            search_field: SearchField::new(),
            keymap: PagerKeyMap::default(),
            config,
            sink,
        }
    }

    /// Renders the current page and the full page-button row.
    ///
    /// Call once after construction to draw the first page.
    pub fn show(&mut self) {
        self.dispatch_items();
        self.dispatch_page_buttons();
    }

    /// Applies new search text, returns to page 1 and re-renders everything.
    pub fn on_search_changed(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.search_field.set_value(self.search_text.clone());
        self.apply_search();
    }

    /// Re-applies the current search text with a full re-render.
    pub fn on_search_submitted(&mut self) {
        self.apply_search();
    }

    /// Shows 1-based `page` of the visible set.
    ///
    /// Pages outside `1..=page_count` are clamped to the nearest valid page.
    pub fn on_page_selected(&mut self, page: usize) {
        let selected = self.paginator.set_page(page);
        if selected != page {
            tracing::warn!(
                requested = page,
                selected,
                page_count = self.paginator.total_pages,
                "clamped out-of-range page selection"
            );
        }
        self.page_changed();
    }

    /// Dispatches a structured input event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::PageSelected(page) => self.on_page_selected(page),
            Event::SearchChanged(text) => self.on_search_changed(text),
            Event::SearchSubmitted => self.on_search_submitted(),
        }
    }

    /// Handles a bubbletea-rs message.
    ///
    /// Accepts [`PageSelectedMsg`], [`SearchChangedMsg`],
    /// [`SearchSubmittedMsg`] and raw [`KeyMsg`] key presses. Keys bound in
    /// the [`PagerKeyMap`] navigate pages or control the search; any other
    /// key edits the search text.
    ///
    /// Returns true if the message was handled.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if let Some(PageSelectedMsg(page)) = msg.downcast_ref::<PageSelectedMsg>() {
            self.on_page_selected(*page);
        } else if let Some(SearchChangedMsg(text)) = msg.downcast_ref::<SearchChangedMsg>() {
            self.on_search_changed(text.clone());
        } else if msg.downcast_ref::<SearchSubmittedMsg>().is_some() {
            self.on_search_submitted();
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        } else {
            return false;
        }
        true
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        if self.keymap.prev_page.matches(key_msg) {
            if self.paginator.prev_page() {
                self.page_changed();
            }
        } else if self.keymap.next_page.matches(key_msg) {
            if self.paginator.next_page() {
                self.page_changed();
            }
        } else if self.keymap.submit_search.matches(key_msg) {
            self.on_search_submitted();
        } else if self.keymap.clear_search.matches(key_msg) {
            if let Some(event) = self.search_field.clear() {
                self.handle(event);
            }
        } else if let Some(event) = self.search_field.handle_key(key_msg) {
            self.handle(event);
        } else {
            return false;
        }
        true
    }

    fn page_changed(&mut self) {
        tracing::debug!(
            page = self.paginator.page,
            page_count = self.paginator.total_pages,
            "page selected"
        );
        self.dispatch_items();
        self.dispatch_page_buttons();
    }

    fn apply_search(&mut self) {
        self.visible = filter(self.dataset, &self.search_text);
        self.paginator.set_total_items(self.visible.len());
        self.paginator.set_page(1);

        tracing::debug!(
            search = %self.search_text,
            visible = self.visible.len(),
            page_count = self.paginator.total_pages,
            "search applied"
        );

        self.dispatch_items();
        self.dispatch_page_buttons();
    }

    fn dispatch_items(&mut self) {
        let records = self.paginator.page_slice(self.visible.as_slice());
        let no_results = self.visible.is_empty();
        tracing::trace!(records = records.len(), no_results, "render items");
        self.sink.render_items(records, no_results);
    }

    fn dispatch_page_buttons(&mut self) {
        let (count, active) = (self.paginator.total_pages, self.paginator.page);
        tracing::trace!(count, active, "render page buttons");
        self.sink.render_page_buttons(count, active);
    }

    /// The applied search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The active page, 1-based.
    pub fn active_page(&self) -> usize {
        self.paginator.page
    }

    /// Number of pages of the visible set (at least 1).
    pub fn page_count(&self) -> usize {
        self.paginator.total_pages
    }

    /// Records passing the current search, in dataset order.
    pub fn visible(&self) -> &VisibleSet<'a, I> {
        &self.visible
    }

    /// Records shown on the active page.
    pub fn current_page_items(&self) -> &[&'a I] {
        self.paginator.page_slice(self.visible.as_slice())
    }

    /// The dataset being paginated.
    pub fn dataset(&self) -> &'a [I] {
        self.dataset
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Key bindings used by [`update`](Self::update).
    pub fn keymap(&self) -> &PagerKeyMap {
        &self.keymap
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: PagerKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// The search field fed by key presses.
    pub fn search_field(&self) -> &SearchField {
        &self.search_field
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the controller, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
