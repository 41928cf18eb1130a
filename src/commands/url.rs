//! Url command - share string for a set of filters

use crate::filters::{FilterState, codec};

/// Execute the url command
///
/// Returns `?` followed by the encoded state, or an empty string when every
/// filter is at its default.
#[must_use]
pub fn execute(state: &FilterState) -> String {
    let query = codec::encode(state);
    if query.is_empty() {
        query
    } else {
        format!("?{query}")
    }
}
