//! Search filtering of a dataset into a visible set.
//!
//! Filtering is a case-insensitive substring match of the search text against
//! each item's [`filter_value`](crate::record::Item::filter_value). It is pure:
//! the dataset is only borrowed, and the resulting [`VisibleSet`] refers back
//! into it without copying records.

use crate::record::Item;

/// Whether a search has been applied to produce a visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// The search text is empty; every record is visible.
    #[default]
    Unfiltered,
    /// A non-empty search text has been applied.
    FilterApplied,
}

/// The ordered subset of a dataset passing the current search.
///
/// Items keep their dataset order. The [`state`](Self::state) tells a search
/// that matched nothing apart from an empty, unfiltered dataset.
#[derive(Debug)]
pub struct VisibleSet<'a, I> {
    items: Vec<&'a I>,
    state: FilterState,
}

impl<I> Clone for VisibleSet<'_, I> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            state: self.state,
        }
    }
}

impl<'a, I> VisibleSet<'a, I> {
    /// Every item of `dataset`, unfiltered.
    pub fn all(dataset: &'a [I]) -> Self {
        Self {
            items: dataset.iter().collect(),
            state: FilterState::Unfiltered,
        }
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visible items as a slice of references, in dataset order.
    pub fn as_slice(&self) -> &[&'a I] {
        &self.items
    }

    /// Iterates the visible items in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &'a I> + '_ {
        self.items.iter().copied()
    }

    /// How this set was produced.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Returns true if a search text was applied.
    pub fn is_filtered(&self) -> bool {
        self.state == FilterState::FilterApplied
    }
}

/// Reduces `dataset` to the items whose filter value contains `search_text`,
/// ignoring case.
///
/// An empty `search_text` yields the whole dataset in its original order.
///
/// # Examples
///
/// ```rust
/// use roster_pager::filter::{filter, FilterState};
/// use roster_pager::PersonRecord;
///
/// let dataset = vec![
///     PersonRecord::new("Anna", "Kim", "anna@example.com", "2020", ""),
///     PersonRecord::new("Joanna", "Berg", "jo@example.com", "2019", ""),
///     PersonRecord::new("Ben", "Ng", "ben@example.com", "2018", ""),
/// ];
///
/// let visible = filter(&dataset, "ANNA");
/// let names: Vec<_> = visible.iter().map(|p| p.display_name()).collect();
/// assert_eq!(names, ["Anna Kim", "Joanna Berg"]);
/// assert_eq!(visible.state(), FilterState::FilterApplied);
///
/// assert_eq!(filter(&dataset, "").len(), 3);
/// ```
pub fn filter<'a, I: Item>(dataset: &'a [I], search_text: &str) -> VisibleSet<'a, I> {
    if search_text.is_empty() {
        return VisibleSet::all(dataset);
    }

    let needle = search_text.to_lowercase();
    let items = dataset
        .iter()
        .filter(|item| item.filter_value().to_lowercase().contains(&needle))
        .collect();

    VisibleSet {
        items,
        state: FilterState::FilterApplied,
    }
}
