use crate::ir::ArgumentDefinition;
use crate::ir::Definition;
use crate::ir::OperationKind;
use crate::ir::Selection;
use crate::ir::TypeAnnotation;
use crate::ir::Value;

const FRAGMENT_JSON: &str = r#"{
    "kind": "Fragment",
    "name": "UserProfile",
    "type": "User",
    "argumentDefinitions": [
        {"kind": "LocalArgumentDefinition", "name": "size", "type": "Int", "defaultValue": 64},
        {"kind": "RootArgumentDefinition", "name": "scale", "type": "Float!"}
    ],
    "directives": [],
    "selections": [
        {
            "kind": "ScalarField",
            "alias": null,
            "name": "id",
            "type": "ID!",
            "args": [],
            "directives": []
        },
        {
            "kind": "FragmentSpread",
            "name": "UserAvatar",
            "args": [],
            "directives": [
                {"name": "relay", "args": [{"name": "mask", "value": {"kind": "Literal", "value": false}}]}
            ],
            "metadata": {"origin": "user_profile.graphql"}
        }
    ]
}"#;

#[test]
fn fragment_json_loads_into_ir() {
    let definition: Definition = serde_json::from_str(FRAGMENT_JSON).unwrap();
    let fragment = definition.as_fragment().unwrap();

    assert_eq!(definition.name(), "UserProfile");
    assert_eq!(fragment.type_condition(), "User");
    assert_eq!(
        fragment.argument_definitions,
        vec![
            ArgumentDefinition::local(
                "size",
                TypeAnnotation::named("Int", true),
                Some(Value::Int(64)),
            ),
            ArgumentDefinition::root("scale", TypeAnnotation::named("Float", false)),
        ],
    );

    let Selection::FragmentSpread(spread) = &fragment.selections[1] else {
        panic!("expected a fragment spread, got {:?}", fragment.selections[1]);
    };
    assert_eq!(spread.name(), "UserAvatar");
    assert_eq!(
        spread.metadata.as_ref().and_then(|m| m.get("origin")),
        Some(&Value::String("user_profile.graphql".to_string())),
    );
}

#[test]
fn root_json_loads_into_ir() {
    let definition: Definition = serde_json::from_str(r#"{
        "kind": "Root",
        "name": "ViewerQuery",
        "operation": "query",
        "type": "Query",
        "argumentDefinitions": [],
        "directives": [],
        "selections": []
    }"#).unwrap();

    let root = definition.as_root().unwrap();
    assert_eq!(root.operation, OperationKind::Query);
    assert_eq!(root.type_, "Query");
    assert!(definition.as_fragment().is_none());
}
