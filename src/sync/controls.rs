//! Form controls and the state they carry
//!
//! The [`Controls`] trait is the seam between the sync loop and whatever
//! holds the on-screen control values. Reading always rebuilds the whole
//! [`FilterState`], so a stale field can never survive a control read.

use crate::filters::{FilterState, SortMode};

/// Getters and setters for every filter control
pub trait Controls {
    fn query(&self) -> String;
    fn set_query(&mut self, value: &str);

    fn categories(&self) -> Vec<String>;
    fn set_categories(&mut self, values: &[String]);

    fn price_min(&self) -> String;
    fn set_price_min(&mut self, value: &str);

    fn price_max(&self) -> String;
    fn set_price_max(&mut self, value: &str);

    fn in_stock_only(&self) -> bool;
    fn set_in_stock_only(&mut self, value: bool);

    fn sort(&self) -> SortMode;
    fn set_sort(&mut self, value: SortMode);
}

/// Read every control into a fresh, normalized state
#[must_use]
pub fn read_state(controls: &dyn Controls) -> FilterState {
    FilterState {
        query: controls.query(),
        categories: controls.categories(),
        price_min: controls.price_min(),
        price_max: controls.price_max(),
        in_stock_only: controls.in_stock_only(),
        sort: controls.sort(),
    }
    .normalized()
}

/// Write every field of `state` to the controls
pub fn apply_state(controls: &mut dyn Controls, state: &FilterState) {
    controls.set_query(&state.query);
    controls.set_categories(&state.categories);
    controls.set_price_min(&state.price_min);
    controls.set_price_max(&state.price_max);
    controls.set_in_stock_only(state.in_stock_only);
    controls.set_sort(state.sort);
}

/// How a control's change notifications reach the sync loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Run once input stops arriving (free text, numeric fields)
    Debounced,
    /// Run on every change (selects, checkboxes)
    Immediate,
}

/// Identifies one control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlField {
    Query,
    Categories,
    PriceMin,
    PriceMax,
    InStock,
    Sort,
}

impl ControlField {
    /// Controls in form order
    pub const ALL: [Self; 6] = [
        Self::Query,
        Self::Categories,
        Self::PriceMin,
        Self::PriceMax,
        Self::InStock,
        Self::Sort,
    ];

    #[must_use]
    pub const fn trigger(self) -> Trigger {
        match self {
            Self::Query | Self::PriceMin | Self::PriceMax => Trigger::Debounced,
            Self::Categories | Self::InStock | Self::Sort => Trigger::Immediate,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Query => "Search",
            Self::Categories => "Categories",
            Self::PriceMin => "Min price",
            Self::PriceMax => "Max price",
            Self::InStock => "In stock only",
            Self::Sort => "Sort",
        }
    }

    /// Next control in form order, wrapping
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous control in form order, wrapping
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// In-memory form: the control values plus the category options on offer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormControls {
    query: String,
    category_options: Vec<String>,
    selected_categories: Vec<String>,
    price_min: String,
    price_max: String,
    in_stock_only: bool,
    sort: SortMode,
}

impl FormControls {
    /// Create an empty form offering the given categories
    #[must_use]
    pub fn new(category_options: Vec<String>) -> Self {
        Self {
            category_options,
            ..Self::default()
        }
    }

    /// Categories the user can pick from
    #[must_use]
    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    /// Replace the category options, keeping the current selection
    pub fn set_category_options(&mut self, options: Vec<String>) {
        self.category_options = options;
        let selected = std::mem::take(&mut self.selected_categories);
        self.set_categories(&selected);
    }

    /// Options followed by any selected category that matches none of them
    #[must_use]
    pub fn category_entries(&self) -> Vec<&str> {
        let mut entries: Vec<&str> = self.category_options.iter().map(String::as_str).collect();
        for selected in &self.selected_categories {
            if !self
                .category_options
                .iter()
                .any(|option| same_category(option, selected))
            {
                entries.push(selected);
            }
        }
        entries
    }

    #[must_use]
    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories
            .iter()
            .any(|c| same_category(c, category))
    }

    /// Select or deselect one category
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self
            .selected_categories
            .iter()
            .position(|c| same_category(c, category))
        {
            self.selected_categories.remove(pos);
        } else {
            let category = self.option_spelling(category);
            self.selected_categories.push(category);
        }
    }

    /// The option matching `value` case-insensitively, or `value` itself
    fn option_spelling(&self, value: &str) -> String {
        self.category_options
            .iter()
            .find(|option| same_category(option, value))
            .map_or_else(|| value.to_string(), Clone::clone)
    }

    /// Mutable access to a text control, `None` for non-text controls
    pub fn text_mut(&mut self, field: ControlField) -> Option<&mut String> {
        match field {
            ControlField::Query => Some(&mut self.query),
            ControlField::PriceMin => Some(&mut self.price_min),
            ControlField::PriceMax => Some(&mut self.price_max),
            _ => None,
        }
    }

    /// Current text of a text control
    #[must_use]
    pub fn text(&self, field: ControlField) -> Option<&str> {
        match field {
            ControlField::Query => Some(&self.query),
            ControlField::PriceMin => Some(&self.price_min),
            ControlField::PriceMax => Some(&self.price_max),
            _ => None,
        }
    }
}

/// Categories match case-insensitively, as in the filter engine
fn same_category(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Controls for FormControls {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn set_query(&mut self, value: &str) {
        self.query = value.to_string();
    }

    fn categories(&self) -> Vec<String> {
        self.selected_categories.clone()
    }

    fn set_categories(&mut self, values: &[String]) {
        let mut selected: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            let value = self.option_spelling(value);
            if !selected.iter().any(|c| same_category(c, &value)) {
                selected.push(value);
            }
        }
        self.selected_categories = selected;
    }

    fn price_min(&self) -> String {
        self.price_min.clone()
    }

    fn set_price_min(&mut self, value: &str) {
        self.price_min = value.to_string();
    }

    fn price_max(&self) -> String {
        self.price_max.clone()
    }

    fn set_price_max(&mut self, value: &str) {
        self.price_max = value.to_string();
    }

    fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    fn set_in_stock_only(&mut self, value: bool) {
        self.in_stock_only = value;
    }

    fn sort(&self) -> SortMode {
        self.sort
    }

    fn set_sort(&mut self, value: SortMode) {
        self.sort = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_state_normalizes() {
        let mut form = FormControls::new(vec!["A".into(), "B".into()]);
        form.set_query("lamp");
        form.set_price_min(" 5 ");
        form.set_price_max("lots");
        form.toggle_category("B");

        let state = read_state(&form);
        assert_eq!(state.query, "lamp");
        assert_eq!(state.price_min, "5");
        assert_eq!(state.price_max, "");
        assert_eq!(state.categories, vec!["B"]);
    }

    #[test]
    fn test_apply_then_read_is_identity_for_normalized_state() {
        let state = FilterState {
            query: "oak".into(),
            categories: vec!["Furniture".into()],
            price_min: "10".into(),
            price_max: "100".into(),
            in_stock_only: true,
            sort: SortMode::PriceAsc,
        };
        let mut form = FormControls::default();
        apply_state(&mut form, &state);
        assert_eq!(read_state(&form), state);
    }

    #[test]
    fn test_apply_overwrites_every_field() {
        let mut form = FormControls::default();
        form.set_query("stale");
        form.set_in_stock_only(true);
        form.toggle_category("Old");

        apply_state(&mut form, &FilterState::default());
        assert_eq!(read_state(&form), FilterState::default());
    }

    #[test]
    fn test_toggle_category() {
        let mut form = FormControls::new(vec!["A".into()]);
        form.toggle_category("A");
        assert!(form.is_category_selected("A"));
        form.toggle_category("A");
        assert!(!form.is_category_selected("A"));
    }

    #[test]
    fn test_restored_categories_take_option_spelling() {
        let mut form = FormControls::new(vec!["Garden".into(), "Lighting".into()]);
        apply_state(
            &mut form,
            &FilterState {
                categories: vec!["garden".into(), "GARDEN".into(), "Toys".into()],
                ..FilterState::default()
            },
        );

        assert_eq!(form.categories(), vec!["Garden", "Toys"]);
        assert!(form.is_category_selected("Garden"));
        assert_eq!(form.category_entries(), vec!["Garden", "Lighting", "Toys"]);

        form.toggle_category("Toys");
        assert_eq!(form.category_entries(), vec!["Garden", "Lighting"]);
        form.toggle_category("Garden");
        assert!(form.categories().is_empty());
    }

    #[test]
    fn test_new_options_respell_selection() {
        let mut form = FormControls::default();
        form.set_categories(&["lighting".to_string()]);
        assert_eq!(form.category_entries(), vec!["lighting"]);

        form.set_category_options(vec!["Lighting".into()]);
        assert_eq!(form.categories(), vec!["Lighting"]);
        assert_eq!(form.category_entries(), vec!["Lighting"]);
    }

    #[test]
    fn test_triggers() {
        assert_eq!(ControlField::Query.trigger(), Trigger::Debounced);
        assert_eq!(ControlField::PriceMax.trigger(), Trigger::Debounced);
        assert_eq!(ControlField::Sort.trigger(), Trigger::Immediate);
        assert_eq!(ControlField::InStock.trigger(), Trigger::Immediate);
        assert_eq!(ControlField::Categories.trigger(), Trigger::Immediate);
    }

    #[test]
    fn test_text_mut_only_for_text_fields() {
        let mut form = FormControls::default();
        form.text_mut(ControlField::PriceMin).unwrap().push('7');
        assert_eq!(form.text(ControlField::PriceMin), Some("7"));
        assert!(form.text_mut(ControlField::Sort).is_none());
    }
}
