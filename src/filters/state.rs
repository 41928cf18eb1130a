//! Filter state and sort modes
//!
//! [`FilterState`] is the normalized record of every active filter and sort
//! choice. Every field has a default, so a state read from any source is
//! always complete.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    /// Most recently created first
    #[default]
    Newest,
}

impl SortMode {
    /// All modes, in selector order
    pub const ALL: [Self; 5] = [
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Wire name used in query strings and config
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::Newest => "newest",
        }
    }

    /// Label shown in the sort selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::NameAsc => "Name: A-Z",
            Self::NameDesc => "Name: Z-A",
            Self::Newest => "Newest",
        }
    }

    /// Next mode in selector order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous mode in selector order, wrapping around
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode '{0}'")]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownSortMode(s.to_string()))
    }
}

/// Normalized filter and sort selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search term
    pub query: String,
    /// Selected categories; empty means no restriction
    pub categories: Vec<String>,
    /// Inclusive lower price bound; empty means unbounded
    pub price_min: String,
    /// Inclusive upper price bound; empty means unbounded
    pub price_max: String,
    pub in_stock_only: bool,
    pub sort: SortMode,
}

impl FilterState {
    /// True when every field holds its default
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Return the normalized form of this state
    ///
    /// - categories are split on commas, trimmed, and deduplicated; empties dropped
    /// - price bounds are trimmed, and anything that is not a finite number becomes empty
    ///
    /// The query text is kept verbatim. Normalizing twice changes nothing.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            query: self.query.clone(),
            categories: normalize_categories(self.categories.iter().map(String::as_str)),
            price_min: normalize_bound(&self.price_min),
            price_max: normalize_bound(&self.price_max),
            in_stock_only: self.in_stock_only,
            sort: self.sort,
        }
    }
}

/// Split, trim and deduplicate category values, keeping first-seen order
pub fn normalize_categories<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        for part in value.split(',') {
            let part = part.trim();
            if !part.is_empty() && !out.iter().any(|c| c == part) {
                out.push(part.to_string());
            }
        }
    }
    out
}

/// Trim a price bound and blank it unless it parses as a finite number
#[must_use]
pub fn normalize_bound(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_bound(trimmed) {
        Some(_) => trimmed.to_string(),
        None => String::new(),
    }
}

/// Parse a price bound; empty or non-numeric bounds are unbounded (`None`)
#[must_use]
pub fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
