//! Core traits for the presentation layer

use crate::inventory::{ErrorSink, InventoryItem};

/// Receiver of the filtered view
///
/// The sync loop hands every run's result to a presenter; presenters never
/// see the filter state or the query string. Errors arrive through the
/// [`ErrorSink`] supertrait (the error banner).
///
/// # Examples
///
/// ```
/// use vitrine::inventory::{ErrorSink, InventoryItem};
/// use vitrine::ui::Presenter;
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl ErrorSink for Counter {
///     fn show_error(&mut self, message: &str) {
///         eprintln!("{message}");
///     }
/// }
///
/// impl Presenter for Counter {
///     fn render(&mut self, items: &[&InventoryItem]) {
///         self.0 = items.len();
///     }
///     fn show_details(&mut self, _item: &InventoryItem) {}
/// }
/// ```
pub trait Presenter: ErrorSink {
    /// Display the ordered result set; an empty slice is the empty state
    fn render(&mut self, items: &[&InventoryItem]);

    /// Display the detail view for one item
    fn show_details(&mut self, item: &InventoryItem);
}
