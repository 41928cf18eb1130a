//! Property tests for the query codec and the filter engine.

use proptest::prelude::*;
use vitrine::{
    filters::{FilterState, SortMode, codec, engine},
    inventory::InventoryItem,
};

fn sort_mode() -> impl Strategy<Value = SortMode> {
    prop::sample::select(SortMode::ALL.to_vec())
}

fn bound() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100_000).prop_map(|n| format!("{}.{:02}", n / 100, n % 100)),
        "[a-z ]{1,6}",
    ]
}

/// Arbitrary, not necessarily normalized, state
fn raw_state() -> impl Strategy<Value = FilterState> {
    (
        "\\PC{0,12}",
        prop::collection::vec("[A-Za-z ,]{0,10}", 0..4),
        bound(),
        bound(),
        any::<bool>(),
        sort_mode(),
    )
        .prop_map(
            |(query, categories, price_min, price_max, in_stock_only, sort)| FilterState {
                query,
                categories,
                price_min,
                price_max,
                in_stock_only,
                sort,
            },
        )
}

fn item() -> impl Strategy<Value = InventoryItem> {
    (
        "[a-z]{1,6}",
        "[A-Za-z ]{1,12}",
        prop::sample::select(vec!["Lighting", "Garden", "Furniture"]),
        0u32..50_000,
        any::<bool>(),
        prop_oneof![
            (2020u32..2025, 1u32..13, 1u32..29)
                .prop_map(|(y, m, d)| format!("{y}-{m:02}-{d:02}")),
            Just(String::new()),
        ],
    )
        .prop_map(|(id, name, category, cents, in_stock, created_at)| InventoryItem {
            id,
            description: format!("{name} for the home"),
            name,
            category: category.to_string(),
            price: f64::from(cents) / 100.0,
            currency: "USD".to_string(),
            in_stock,
            tags: Vec::new(),
            image: String::new(),
            created_at,
        })
}

fn ids(items: &[&InventoryItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

proptest! {
    #[test]
    fn prop_codec_round_trip(state in raw_state()) {
        let state = state.normalized();
        prop_assert_eq!(codec::decode(&codec::encode(&state)), state);
    }

    #[test]
    fn prop_decode_accepts_leading_question_mark(state in raw_state()) {
        let query = codec::encode(&state.normalized());
        prop_assert_eq!(codec::decode(&format!("?{query}")), codec::decode(&query));
    }

    #[test]
    fn prop_normalization_is_idempotent(state in raw_state()) {
        let once = state.normalized();
        prop_assert_eq!(once.normalized(), once);
    }

    #[test]
    fn prop_filtering_is_idempotent(
        items in prop::collection::vec(item(), 0..20),
        state in raw_state(),
    ) {
        let state = state.normalized();
        let first = engine::apply_owned(&items, &state);
        let second = engine::apply(&first, &state);
        prop_assert_eq!(ids(&second), ids(&engine::apply(&items, &state)));
    }

    #[test]
    fn prop_price_bounds_are_inclusive(
        items in prop::collection::vec(item(), 0..30),
        low in 0u32..300,
        span in 0u32..300,
    ) {
        let (min, max) = (f64::from(low), f64::from(low + span));
        let state = FilterState {
            price_min: low.to_string(),
            price_max: (low + span).to_string(),
            ..FilterState::default()
        };

        let view = engine::apply(&items, &state);
        prop_assert!(view.iter().all(|i| min <= i.price && i.price <= max));

        let expected = items.iter().filter(|i| min <= i.price && i.price <= max).count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn prop_in_stock_only_keeps_stocked_items(items in prop::collection::vec(item(), 0..30)) {
        let state = FilterState { in_stock_only: true, ..FilterState::default() };
        let view = engine::apply(&items, &state);
        prop_assert!(view.iter().all(|i| i.in_stock));
        prop_assert_eq!(view.len(), items.iter().filter(|i| i.in_stock).count());
    }
}
