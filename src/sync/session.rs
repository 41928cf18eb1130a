//! The render/sync loop
//!
//! A [`Session`] owns the inventory, the current filter state, the form
//! controls, the debounce timer, the presenter and the location. Every run
//! recomputes its output from scratch:
//!
//! ```text
//! controls ──read──▶ FilterState ──encode──▶ location.replace
//!                        │
//!                        └──engine::apply──▶ presenter.render
//! ```
//!
//! On start the location, not the controls, is the source of truth: the
//! state is decoded from the query string and written to the controls
//! before the first run.

use super::controls::{ControlField, Controls, FormControls, Trigger, apply_state, read_state};
use super::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use super::location::Location;
use crate::filters::{FilterState, codec, engine};
use crate::inventory::{Inventory, InventoryItem, InventorySource, Loader};
use crate::ui::Presenter;
use std::time::{Duration, Instant};

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Quiet period before debounced controls trigger a run
    pub debounce: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Catalog browsing session
pub struct Session<P, L> {
    inventory: Inventory,
    state: FilterState,
    controls: FormControls,
    debouncer: Debouncer,
    presenter: P,
    location: L,
    visible: usize,
}

impl<P: Presenter, L: Location> Session<P, L> {
    /// Load the inventory, restore state from the location and run once
    ///
    /// Nothing is rendered until the load has finished. A failed load is
    /// reported once through the presenter and the session continues with an
    /// empty inventory.
    pub fn start<S: InventorySource>(
        loader: Loader<S>,
        mut presenter: P,
        location: L,
        options: SessionOptions,
    ) -> Self {
        let inventory = loader.load(&mut presenter);
        Self::with_inventory(inventory, presenter, location, options)
    }

    /// Build a session around an already loaded inventory and run once
    pub fn with_inventory(
        inventory: Inventory,
        presenter: P,
        location: L,
        options: SessionOptions,
    ) -> Self {
        let state = codec::decode(&location.current_query());
        let mut controls = FormControls::new(engine::categories(&inventory.items));
        apply_state(&mut controls, &state);

        let mut session = Self {
            inventory,
            state,
            controls,
            debouncer: Debouncer::new(options.debounce),
            presenter,
            location,
            visible: 0,
        };
        session.run();
        session
    }

    /// Read controls, update the location, filter and render
    ///
    /// Returns the number of items rendered.
    pub fn run(&mut self) -> usize {
        self.state = read_state(&self.controls);
        let query = codec::encode(&self.state);
        self.location.replace(&query);

        let view = engine::apply(&self.inventory.items, &self.state);
        self.visible = view.len();
        tracing::debug!(query = %query, visible = self.visible, total = self.inventory.len(), "view updated");
        self.presenter.render(&view);
        self.visible
    }

    /// Handle a change notification from one control
    ///
    /// Immediate controls run now (absorbing any pending debounced change);
    /// debounced controls (re)arm the timer. Returns the rendered count when
    /// a run happened.
    pub fn notify(&mut self, field: ControlField, now: Instant) -> Option<usize> {
        match field.trigger() {
            Trigger::Immediate => {
                self.debouncer.cancel();
                Some(self.run())
            }
            Trigger::Debounced => {
                self.debouncer.schedule(now);
                None
            }
        }
    }

    /// Fire a pending debounced run once the quiet period has elapsed
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        self.debouncer.poll(now).then(|| self.run())
    }

    /// Run immediately if a debounced run is pending
    pub fn flush(&mut self) -> Option<usize> {
        if self.debouncer.is_pending() {
            self.debouncer.cancel();
            Some(self.run())
        } else {
            None
        }
    }

    /// Restore the default state on the controls and run
    pub fn reset(&mut self) -> usize {
        apply_state(&mut self.controls, &FilterState::default());
        self.debouncer.cancel();
        self.run()
    }

    /// Replace the whole filter state (normalized) and run
    pub fn set_state(&mut self, state: &FilterState) -> usize {
        apply_state(&mut self.controls, &state.normalized());
        self.debouncer.cancel();
        self.run()
    }

    /// "Item activated": show the detail view for `id`
    ///
    /// Returns false when no item has that id.
    pub fn open_item(&mut self, id: &str) -> bool {
        match self.inventory.get(id) {
            Some(item) => {
                self.presenter.show_details(item);
                true
            }
            None => {
                tracing::warn!(id, "activated item is not in the inventory");
                false
            }
        }
    }

    /// Items matching the current state, in display order
    #[must_use]
    pub fn view(&self) -> Vec<&InventoryItem> {
        engine::apply(&self.inventory.items, &self.state)
    }

    /// Number of items shown by the last run
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub const fn controls(&self) -> &FormControls {
        &self.controls
    }

    /// Mutable controls; follow edits with [`notify`](Self::notify)
    pub const fn controls_mut(&mut self) -> &mut FormControls {
        &mut self.controls
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    #[must_use]
    pub const fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Take the presenter and location back out of the session
    pub fn into_parts(self) -> (P, L) {
        (self.presenter, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SortMode;
    use crate::inventory::ReaderSource;
    use crate::sync::MemoryLocation;
    use crate::testing::{RecordingPresenter, sample_inventory};
    use std::io::Cursor;

    fn session(query: &str) -> Session<RecordingPresenter, MemoryLocation> {
        Session::with_inventory(
            sample_inventory(),
            RecordingPresenter::default(),
            MemoryLocation::new(query),
            SessionOptions::default(),
        )
    }

    #[test]
    fn test_initial_state_comes_from_location() {
        let s = session("?cat=Garden&sort=price_asc");
        assert_eq!(s.state().categories, vec!["Garden"]);
        assert_eq!(s.controls().sort(), SortMode::PriceAsc);
        assert_eq!(s.presenter().last_ids(), vec!["p6", "p7"]);
        assert_eq!(s.location().current_query(), "cat=Garden&sort=price_asc");
    }

    #[test]
    fn test_initial_run_canonicalizes_location() {
        let s = session("min=abc&utm=1&stock=1");
        assert_eq!(s.location().current_query(), "stock=1");
    }

    #[test]
    fn test_immediate_control_runs_now() {
        let mut s = session("");
        let before = s.presenter().renders.len();
        s.controls_mut().set_in_stock_only(true);
        let count = s.notify(ControlField::InStock, Instant::now());
        assert_eq!(count, Some(5));
        assert_eq!(s.presenter().renders.len(), before + 1);
        assert_eq!(s.location().current_query(), "stock=1");
    }

    #[test]
    fn test_debounced_control_waits_for_quiet() {
        let mut s = session("");
        let t0 = Instant::now();
        let before = s.presenter().renders.len();

        s.controls_mut().set_query("l");
        assert_eq!(s.notify(ControlField::Query, t0), None);
        s.controls_mut().set_query("lamp");
        s.notify(ControlField::Query, t0 + Duration::from_millis(100));

        assert_eq!(s.tick(t0 + Duration::from_millis(350)), None);
        assert_eq!(s.presenter().renders.len(), before);

        assert!(s.tick(t0 + Duration::from_millis(400)).is_some());
        assert_eq!(s.presenter().renders.len(), before + 1);
        assert_eq!(s.location().current_query(), "q=lamp");
        assert_eq!(s.tick(t0 + Duration::from_secs(2)), None);
    }

    #[test]
    fn test_immediate_absorbs_pending_debounce() {
        let mut s = session("");
        let t0 = Instant::now();
        s.controls_mut().set_price_max("20");
        s.notify(ControlField::PriceMax, t0);
        s.controls_mut().set_sort(SortMode::NameAsc);
        s.notify(ControlField::Sort, t0);

        assert_eq!(s.location().current_query(), "max=20&sort=name_asc");
        assert!(!s.debouncer().is_pending());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut s = session("q=lamp&stock=1&sort=name_desc");
        s.controls_mut().set_price_min("3");
        s.notify(ControlField::PriceMin, Instant::now());

        let count = s.reset();
        assert_eq!(count, sample_inventory().len());
        assert_eq!(*s.state(), FilterState::default());
        assert_eq!(s.location().current_query(), "");
        assert!(!s.debouncer().is_pending());
    }

    #[test]
    fn test_open_item() {
        let mut s = session("");
        assert!(s.open_item("p3"));
        assert!(!s.open_item("nope"));
        assert_eq!(s.presenter().details, vec!["p3"]);
    }

    #[test]
    fn test_failed_load_reports_once_and_renders_empty() {
        let loader = Loader::new(ReaderSource::new("memory", Cursor::new("not json")));
        let s = Session::start(
            loader,
            RecordingPresenter::default(),
            MemoryLocation::new("q=lamp"),
            SessionOptions::default(),
        );
        assert_eq!(s.presenter().errors.len(), 1);
        assert_eq!(s.presenter().renders, vec![Vec::<String>::new()]);
        assert_eq!(s.visible(), 0);
        assert_eq!(s.location().current_query(), "q=lamp");
    }

    #[test]
    fn test_set_state_normalizes() {
        let mut s = session("");
        s.set_state(&FilterState {
            categories: vec!["Lighting,Garden".into()],
            price_min: "x".into(),
            ..FilterState::default()
        });
        assert_eq!(s.state().categories, vec!["Lighting", "Garden"]);
        assert_eq!(s.location().current_query(), "cat=Lighting%2CGarden");
    }
}
