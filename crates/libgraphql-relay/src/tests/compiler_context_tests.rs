use crate::CompilerContext;
use crate::CompilerContextError;
use crate::ir::Definition;
use crate::ir::Fragment;
use crate::ir::OperationKind;
use crate::ir::Root;

#[test]
fn empty_context() {
    let context = CompilerContext::new();
    assert!(context.is_empty());
    assert_eq!(context.len(), 0);
    assert!(context.get("Anything").is_none());
}

#[test]
fn definitions_keep_insertion_order() {
    let context = CompilerContext::from_definitions([
        Fragment::new("Zeta", "User").into(),
        Root::new("AlphaQuery", OperationKind::Query, "Query").into(),
        Fragment::new("Beta", "Post").into(),
    ]).unwrap();

    let names: Vec<&str> = context.definitions().map(Definition::name).collect();
    assert_eq!(names, vec!["Zeta", "AlphaQuery", "Beta"]);
}

#[test]
fn typed_lookups_check_the_definition_kind() {
    let context = CompilerContext::from_definitions([
        Fragment::new("UserFields", "User").into(),
        Root::new("ViewerQuery", OperationKind::Query, "Query").into(),
    ]).unwrap();

    assert!(context.get_fragment("UserFields").is_some());
    assert!(context.get_root("UserFields").is_none());
    assert!(context.get_root("ViewerQuery").is_some());
    assert!(context.get_fragment("ViewerQuery").is_none());
}

#[test]
fn duplicate_names_are_rejected_across_kinds() {
    let mut context = CompilerContext::new();
    context.add(Fragment::new("Viewer", "User").into()).unwrap();

    let err = context
        .add(Root::new("Viewer", OperationKind::Query, "Query").into())
        .unwrap_err();

    assert_eq!(err, CompilerContextError::DuplicateDefinition {
        definition_name: "Viewer".to_string(),
        existing_kind: "fragment",
        new_kind: "operation",
    });
    assert_eq!(context.len(), 1);
}
