use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_relay::CompilerContext;
use libgraphql_relay::codegen::Batch;
use libgraphql_relay::codegen::GeneratedNode;
use libgraphql_relay::codegen::compute_hash;
use libgraphql_relay::ir::Argument;
use libgraphql_relay::ir::ArgumentDefinition;
use libgraphql_relay::ir::Definition;
use libgraphql_relay::ir::Directive;
use libgraphql_relay::ir::Fragment;
use libgraphql_relay::ir::FragmentSpread;
use libgraphql_relay::ir::LinkedField;
use libgraphql_relay::ir::OperationKind;
use libgraphql_relay::ir::Root;
use libgraphql_relay::ir::ScalarField;
use libgraphql_relay::ir::Selection;
use libgraphql_relay::ir::TypeAnnotation;
use libgraphql_relay::transforms::mask_transform;

fn string_type() -> TypeAnnotation {
    TypeAnnotation::named("String", true)
}

fn unmasked_spread(name: &str) -> Selection {
    FragmentSpread::new(name)
        .with_directives(vec![Directive::new(
            "relay",
            vec![Argument::literal("mask", false)],
        )])
        .into()
}

/// `Frag0` unmasks `Frag1`, which unmasks `Frag2`, and so on. Every fragment
/// declares its own root argument, so the whole chain gets hoisted into
/// `Frag0`.
fn unmask_chain(depth: usize) -> CompilerContext {
    let mut context = CompilerContext::new();
    for i in 0..depth {
        let mut selections: Vec<Selection> = (0..8)
            .map(|field| ScalarField::new(format!("field{field}"), string_type()).into())
            .collect();
        if i + 1 < depth {
            selections.push(unmasked_spread(format!("Frag{}", i + 1).as_str()));
        }
        let fragment = Fragment::new(format!("Frag{i}"), "User")
            .with_argument_definitions(vec![
                ArgumentDefinition::root(format!("arg{i}"), string_type()),
            ])
            .with_selections(selections);
        // Fragment names are unique by construction.
        let _ = context.add(Definition::Fragment(fragment));
    }
    context
}

/// One query whose selections spread `width` leaf fragments, half of them
/// unmasked, nested under linked fields.
fn wide_document(width: usize) -> CompilerContext {
    let mut context = CompilerContext::new();
    let mut spreads = vec![];
    for i in 0..width {
        let name = format!("Leaf{i}");
        let fragment = Fragment::new(name.as_str(), "User")
            .with_selections(vec![
                ScalarField::new("id", string_type()).into(),
                ScalarField::new(format!("leaf{i}"), string_type()).into(),
            ]);
        let _ = context.add(Definition::Fragment(fragment));
        spreads.push(if i % 2 == 0 {
            unmasked_spread(name.as_str())
        } else {
            FragmentSpread::new(name).into()
        });
    }
    let root = Root::new("WideQuery", OperationKind::Query, "Query")
        .with_selections(vec![
            LinkedField::new("viewer", TypeAnnotation::named("User", true))
                .with_selections(spreads)
                .into(),
        ]);
    let _ = context.add(Definition::Root(root));
    context
}

fn mask_transform_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_transform_chain");
    for depth in [4, 16, 64] {
        let context = unmask_chain(depth);
        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            &context,
            |b, context| b.iter(|| black_box(mask_transform::transform(context))),
        );
    }
    group.finish();
}

fn mask_transform_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_transform_wide");
    for width in [16, 128, 1024] {
        let context = wide_document(width);
        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &context,
            |b, context| b.iter(|| black_box(mask_transform::transform(context))),
        );
    }
    group.finish();
}

fn artifact_hash(c: &mut Criterion) {
    let context = wide_document(128);
    let operation = match context.get_root("WideQuery") {
        Some(root) => root.clone(),
        None => return,
    };
    let node = GeneratedNode::Batch(Batch {
        name: "WideQuery".to_string(),
        operation,
        text: "query WideQuery { viewer { id } }".to_string(),
    });
    let generated_text = "type response = {. \"id\": string};\n".repeat(64);

    c.bench_function("compute_hash", |b| {
        b.iter(|| black_box(compute_hash(&node, generated_text.as_str())))
    });
}

criterion_group!(
    benches,
    mask_transform_chain,
    mask_transform_wide,
    artifact_hash,
);
criterion_main!(benches);
