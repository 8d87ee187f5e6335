use crate::canonical_json::canonical_eq;
use crate::canonical_json::to_canonical_json;
use crate::ir::Value;
use crate::tests::test_utils::local_argdef;
use crate::tests::test_utils::root_argdef;
use indexmap::IndexMap;
use proptest::prelude::*;

#[test]
fn object_keys_are_sorted_at_every_depth() {
    let mut inner = IndexMap::new();
    inner.insert("zebra".to_string(), Value::Int(1));
    inner.insert("apple".to_string(), Value::Bool(true));

    let mut outer = IndexMap::new();
    outer.insert("y".to_string(), Value::Object(inner));
    outer.insert("b".to_string(), Value::List(vec![Value::Int(2), Value::Null]));

    assert_eq!(
        to_canonical_json(&Value::Object(outer)).unwrap(),
        r#"{"b":[2,null],"y":{"apple":true,"zebra":1}}"#,
    );
}

#[test]
fn strings_are_escaped() {
    let value = Value::String("say \"hi\"\n".to_string());
    assert_eq!(to_canonical_json(&value).unwrap(), r#""say \"hi\"\n""#);
}

#[test]
fn argument_definitions_serialize_with_fixed_field_order() {
    let argdef = local_argdef("count", "Int!", Some(Value::Int(10)));
    assert_eq!(
        to_canonical_json(&argdef).unwrap(),
        r#"{"defaultValue":10,"kind":"LocalArgumentDefinition","name":"count","type":"Int!"}"#,
    );
}

#[test]
fn argument_definitions_compare_structurally() {
    assert!(canonical_eq(&root_argdef("id", "ID!"), &root_argdef("id", "ID!")).unwrap());
    assert!(!canonical_eq(&root_argdef("id", "ID!"), &root_argdef("id", "ID")).unwrap());
    assert!(!canonical_eq(
        &root_argdef("id", "ID!"),
        &local_argdef("id", "ID!", None),
    ).unwrap());
    assert!(!canonical_eq(
        &local_argdef("first", "Int", Some(Value::Int(1))),
        &local_argdef("first", "Int", Some(Value::Int(2))),
    ).unwrap());
}

proptest! {
    #[test]
    fn object_insertion_order_does_not_matter(
        entries in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..16),
    ) {
        let forward: IndexMap<String, Value> = entries.iter()
            .map(|(key, value)| (key.clone(), Value::Int(*value)))
            .collect();
        let reversed: IndexMap<String, Value> = entries.iter()
            .rev()
            .map(|(key, value)| (key.clone(), Value::Int(*value)))
            .collect();

        prop_assert_eq!(
            to_canonical_json(&Value::Object(forward)).unwrap(),
            to_canonical_json(&Value::Object(reversed)).unwrap(),
        );
    }

    #[test]
    fn output_is_valid_json_for_the_same_value(
        items in proptest::collection::vec(".*", 0..8),
    ) {
        let value = Value::List(items.into_iter().map(Value::String).collect());
        let canonical = to_canonical_json(&value).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&canonical).unwrap();
        prop_assert_eq!(reparsed, serde_json::to_value(&value).unwrap());
    }
}
