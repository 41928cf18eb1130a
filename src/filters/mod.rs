//! Filter state, query-string codec and filter/sort engine
//!
//! - [`FilterState`]: the normalized record of active filter and sort choices
//! - [`codec`]: `FilterState` <-> query string (`q`, `cat`, `min`, `max`, `stock`, `sort`)
//! - [`engine`]: `(items, state)` -> ordered subset
//!
//! ```
//! use vitrine::filters::{codec, FilterState, SortMode};
//!
//! let state = codec::decode("?cat=Lighting&max=30&sort=price_asc");
//! assert_eq!(state.sort, SortMode::PriceAsc);
//! assert_eq!(codec::encode(&state), "cat=Lighting&max=30&sort=price_asc");
//! assert_eq!(codec::encode(&FilterState::default()), "");
//! ```

pub mod codec;
pub mod engine;
pub mod state;

pub use engine::{PriceBounds, apply, apply_owned, categories};
pub use state::{FilterState, SortMode, UnknownSortMode};
