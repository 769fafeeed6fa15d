//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use tally_core::Value;
use tally_store::SharedStore;

/// Generate a non-nested value.
///
/// Floats stay finite so generated values compare equal to themselves.
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9f64).prop_map(Value::Float),
        ".{0,16}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
    ]
}

/// Generate an arbitrary value, nested up to three levels.
pub fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

/// Generate a key from a small alphabet so scripts revisit keys often.
pub fn key() -> impl Strategy<Value = String> {
    "[a-c]{0,2}".prop_map(String::from)
}

/// One `append` call.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendOp {
    pub key: String,
    pub value: Value,
}

impl Arbitrary for AppendOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (key(), value())
            .prop_map(|(key, value)| AppendOp { key, value })
            .boxed()
    }
}

/// Generate a script of up to `max_len` appends.
pub fn append_ops(max_len: usize) -> impl Strategy<Value = Vec<AppendOp>> {
    prop::collection::vec(any::<AppendOp>(), 0..=max_len)
}

/// Replay a script against a store.
pub fn apply(store: &SharedStore, ops: &[AppendOp]) {
    for op in ops {
        store.append(&op.key, op.value.clone());
    }
}

/// What a store holds after replaying `ops` from empty.
pub fn expected_contents(ops: &[AppendOp]) -> BTreeMap<String, Vec<Value>> {
    let mut model: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for op in ops {
        model.entry(op.key.clone()).or_default().push(op.value.clone());
    }
    model
}
