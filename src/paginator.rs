//! Page arithmetic and the paginator state model.
//!
//! This component computes page counts and slice bounds and tracks which
//! page is active. It does not render anything; sinks decide how pages and
//! page buttons look. Page numbers are 1-based throughout, matching the
//! labels on the rendered page buttons.

/// How the number of pages is derived from a visible item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCountRule {
    /// `max(1, ceil(len / page_size))`.
    #[default]
    Ceil,
    /// `floor(len / page_size) + 1`.
    ///
    /// This is the count produced by the original roster page. When `len` is
    /// an exact multiple of the page size it yields one extra, empty, trailing
    /// page (18 items at 9 per page gives 3 buttons, not 2).
    FloorPlusOne,
}

impl PageCountRule {
    /// Applies the rule. `page_size` values below 1 are treated as 1.
    ///
    /// ```rust
    /// use roster_pager::paginator::PageCountRule;
    ///
    /// assert_eq!(PageCountRule::Ceil.page_count(18, 9), 2);
    /// assert_eq!(PageCountRule::FloorPlusOne.page_count(18, 9), 3);
    /// assert_eq!(PageCountRule::Ceil.page_count(0, 9), 1);
    /// ```
    pub fn page_count(self, len: usize, page_size: usize) -> usize {
        let page_size = page_size.max(1);
        match self {
            PageCountRule::Ceil => len.div_ceil(page_size).max(1),
            PageCountRule::FloorPlusOne => len / page_size + 1,
        }
    }
}

/// Number of pages needed to show `len` items, never less than 1.
///
/// At least one page always exists so that a page-button row can be rendered
/// even for an empty result.
pub fn page_count(len: usize, page_size: usize) -> usize {
    PageCountRule::Ceil.page_count(len, page_size)
}

/// Start (inclusive) and end (exclusive) indices of 1-based `page`.
///
/// Pages past the end produce an empty range at `len`. Page 0 is read as page 1.
pub fn slice_bounds(len: usize, page: usize, page_size: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

/// The items of 1-based `page` within `visible`.
///
/// Returns an empty slice rather than panicking when the page lies past the
/// end of `visible`.
///
/// # Examples
///
/// ```rust
/// use roster_pager::paginator::slice;
///
/// let items: Vec<u32> = (0..20).collect();
/// assert_eq!(slice(&items, 1, 9), &items[0..9]);
/// assert_eq!(slice(&items, 3, 9), &[18, 19]);
/// assert!(slice(&items, 4, 9).is_empty());
/// ```
pub fn slice<T>(visible: &[T], page: usize, page_size: usize) -> &[T] {
    let (start, end) = slice_bounds(visible.len(), page, page_size);
    &visible[start..end]
}

/// A paginator model tracking the active page of a list.
///
/// The active page always stays within `1..=total_pages`: changing the item
/// count or selecting a page clamps it.
///
/// # Examples
///
/// ```rust
/// use roster_pager::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(9)
///     .with_total_items(20);
///
/// assert_eq!(paginator.total_pages, 3);
/// assert!(paginator.on_first_page());
///
/// paginator.set_page(3);
/// assert_eq!(paginator.get_slice_bounds(20), (18, 20));
///
/// // Shrinking the item count pulls the page back into range.
/// paginator.set_total_items(5);
/// assert_eq!(paginator.page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The active page, 1-based.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,
    /// How `total_pages` is derived from the item count.
    pub rule: PageCountRule,
}

impl Default for Model {
    /// One page of one item, using [`PageCountRule::Ceil`].
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 1,
            total_pages: 1,
            rule: PageCountRule::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the page-count rule (builder pattern).
    pub fn with_rule(mut self, rule: PageCountRule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the item count and recalculates pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page. Values below 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recalculates `total_pages` for `items` items.
    ///
    /// If the active page falls out of range it moves to the last page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = self.rule.page_count(items, self.per_page);
        self.page = self.page.clamp(1, self.total_pages);
    }

    /// Selects `page`, clamped into `1..=total_pages`.
    ///
    /// Returns the page actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages);
        self.page
    }

    /// Slice bounds of the active page for data of length `length`.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        slice_bounds(length, self.page, self.per_page)
    }

    /// The active page's portion of `items`.
    pub fn page_slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        slice(items, self.page, self.per_page)
    }

    /// Moves to the previous page, stopping at page 1.
    ///
    /// Returns true if the active page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.on_first_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Moves to the next page, stopping at the last page.
    ///
    /// Returns true if the active page changed.
    pub fn next_page(&mut self) -> bool {
        if self.on_last_page() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns true if the active page is page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true if the active page is the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }
}
