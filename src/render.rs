//! The contract between the pagination controller and whatever draws it.

use crate::config::Config;

/// A presentation surface driven by a
/// [`PaginationController`](crate::controller::PaginationController).
///
/// The controller is the only caller. Both calls are full, idempotent
/// replacements: repeating a call with the same arguments must leave the
/// surface unchanged.
///
/// # Examples
///
/// ```rust
/// use roster_pager::render::RenderSink;
/// use roster_pager::PersonRecord;
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl RenderSink<PersonRecord> for Log {
///     fn render_items(&mut self, records: &[&PersonRecord], no_results: bool) {
///         self.0.push(format!("items={} empty={}", records.len(), no_results));
///     }
///
///     fn render_page_buttons(&mut self, count: usize, active: usize) {
///         self.0.push(format!("buttons={} active={}", count, active));
///     }
/// }
/// ```
pub trait RenderSink<I> {
    /// Replaces the displayed item list with exactly `records`, in order.
    ///
    /// When `no_results` is true `records` is empty and the sink should show
    /// an empty-state indicator instead of a list.
    fn render_items(&mut self, records: &[&I], no_results: bool);

    /// Replaces the pagination control with `count` buttons labelled
    /// `1..=count`, marking button `active` (1-based) and no other.
    fn render_page_buttons(&mut self, count: usize, active: usize);

    /// Adopts the presentation strings of `config`.
    ///
    /// Called once by
    /// [`PaginationController::with_config`](crate::controller::PaginationController::with_config)
    /// before anything is rendered. The default does nothing.
    fn configure(&mut self, _config: &Config) {}
}

impl<I, S: RenderSink<I> + ?Sized> RenderSink<I> for &mut S {
    fn render_items(&mut self, records: &[&I], no_results: bool) {
        (**self).render_items(records, no_results);
    }

    fn render_page_buttons(&mut self, count: usize, active: usize) {
        (**self).render_page_buttons(count, active);
    }

    fn configure(&mut self, config: &Config) {
        (**self).configure(config);
    }
}
