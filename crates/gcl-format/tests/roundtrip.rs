//! The formatter's output must re-parse to an equal tree.

use gcl_format::format_value_default;
use gcl_tree::Value;
use proptest::prelude::*;

/// Any tree the parser could have produced: no `Undefined` (the parser
/// never emits it) and no `Float` (the tokenizer never lexes one).
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9_]{0,7}", inner, 0..6)
                .prop_map(Value::Dict),
        ]
    })
}

proptest! {
    #[test]
    fn formatted_output_reparses_equal(value in arb_value()) {
        let text = format_value_default(&value);
        let reparsed = gcl_tree::parse(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }
}
