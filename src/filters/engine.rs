//! Filter and sort engine
//!
//! [`apply`] maps the full item list and a filter state to the ordered
//! subset to display. It is pure and total: empty inputs, unknown categories
//! and unparseable price bounds all yield a (possibly empty) result rather
//! than an error.
//!
//! Filters are conjunctive and applied in this order, sort always last:
//!
//! 1. text match on name or description
//! 2. category membership
//! 3. inclusive price bounds
//! 4. in-stock only
//! 5. stable sort by [`SortMode`]

use super::state::{FilterState, SortMode, parse_bound};
use crate::inventory::InventoryItem;
use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Parsed, inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceBounds {
    /// Parse bounds from a state; non-numeric bounds are unbounded
    #[must_use]
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            min: parse_bound(&state.price_min),
            max: parse_bound(&state.price_max),
        }
    }

    /// True when `price` lies within both bounds
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// Compiled predicate for one filter state
struct Matcher {
    needle: Option<String>,
    categories: Vec<String>,
    bounds: PriceBounds,
    in_stock_only: bool,
}

impl Matcher {
    fn new(state: &FilterState) -> Self {
        let needle = state.query.trim().to_lowercase();
        Self {
            needle: (!needle.is_empty()).then_some(needle),
            categories: state.categories.iter().map(|c| c.to_lowercase()).collect(),
            bounds: PriceBounds::from_state(state),
            in_stock_only: state.in_stock_only,
        }
    }

    fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(needle) = &self.needle
            && !item.name.to_lowercase().contains(needle)
            && !item.description.to_lowercase().contains(needle)
        {
            return false;
        }

        if !self.categories.is_empty() {
            let category = item.category.to_lowercase();
            if !self.categories.contains(&category) {
                return false;
            }
        }

        if !self.bounds.contains(item.price) {
            return false;
        }

        !self.in_stock_only || item.in_stock
    }
}

fn compare(sort: SortMode, a: &InventoryItem, b: &InventoryItem) -> Ordering {
    match sort {
        SortMode::PriceAsc => a.price.total_cmp(&b.price),
        SortMode::PriceDesc => b.price.total_cmp(&a.price),
        SortMode::NameAsc => compare_names(a, b),
        SortMode::NameDesc => compare_names(b, a),
        // Undated items go last
        SortMode::Newest => match (a.created(), b.created()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Sort key for names: accents folded away, then lowercased
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Accent- and case-insensitive order; the accented spelling breaks ties
fn compare_names(a: &InventoryItem, b: &InventoryItem) -> Ordering {
    collation_key(&a.name)
        .cmp(&collation_key(&b.name))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Filter and sort `items` according to `state`
///
/// The sort is stable: items that compare equal keep their input order.
#[must_use]
pub fn apply<'a>(items: &'a [InventoryItem], state: &FilterState) -> Vec<&'a InventoryItem> {
    let matcher = Matcher::new(state);
    let mut view: Vec<&InventoryItem> = items.iter().filter(|item| matcher.matches(item)).collect();
    view.sort_by(|a, b| compare(state.sort, a, b));
    view
}

/// Like [`apply`], but returns owned items
#[must_use]
pub fn apply_owned(items: &[InventoryItem], state: &FilterState) -> Vec<InventoryItem> {
    apply(items, state).into_iter().cloned().collect()
}

/// Distinct categories in first-seen order
#[must_use]
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}
