//! Query-string codec for [`FilterState`]
//!
//! | Parameter | Field           | Encoding                         |
//! |-----------|-----------------|----------------------------------|
//! | `q`       | `query`         | text                             |
//! | `cat`     | `categories`    | comma-joined list                |
//! | `min`     | `price_min`     | numeric string                   |
//! | `max`     | `price_max`     | numeric string                   |
//! | `stock`   | `in_stock_only` | literal `1`                      |
//! | `sort`    | `sort`          | `price_asc`, `name_desc`, ...    |
//!
//! Only fields that differ from their default are written, so the default
//! state encodes to an empty string. Unknown or malformed parameters are
//! ignored on decode.

use super::state::{FilterState, normalize_categories};
use url::form_urlencoded;

pub const PARAM_QUERY: &str = "q";
pub const PARAM_CATEGORIES: &str = "cat";
pub const PARAM_MIN: &str = "min";
pub const PARAM_MAX: &str = "max";
pub const PARAM_STOCK: &str = "stock";
pub const PARAM_SORT: &str = "sort";

/// Decode a query string (with or without a leading `?`) into a normalized state
#[must_use]
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match &*key {
            PARAM_QUERY => state.query = value.into_owned(),
            PARAM_CATEGORIES => state.categories = normalize_categories([&*value]),
            PARAM_MIN => state.price_min = value.into_owned(),
            PARAM_MAX => state.price_max = value.into_owned(),
            PARAM_STOCK => state.in_stock_only = value == "1",
            PARAM_SORT => {
                if let Ok(sort) = value.parse() {
                    state.sort = sort;
                }
            }
            _ => {}
        }
    }

    state.normalized()
}

/// Encode a state as a minimal query string (no leading `?`)
#[must_use]
pub fn encode(state: &FilterState) -> String {
    let defaults = FilterState::default();
    let mut out = form_urlencoded::Serializer::new(String::new());

    if state.query != defaults.query {
        out.append_pair(PARAM_QUERY, &state.query);
    }
    if !state.categories.is_empty() {
        out.append_pair(PARAM_CATEGORIES, &state.categories.join(","));
    }
    if state.price_min != defaults.price_min {
        out.append_pair(PARAM_MIN, &state.price_min);
    }
    if state.price_max != defaults.price_max {
        out.append_pair(PARAM_MAX, &state.price_max);
    }
    if state.in_stock_only {
        out.append_pair(PARAM_STOCK, "1");
    }
    if state.sort != defaults.sort {
        out.append_pair(PARAM_SORT, state.sort.as_str());
    }

    out.finish()
}
