use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use nodesdl_core::Schema;
use nodesdl_core::SchemaBuilder;
use nodesdl_core::global_id::new_global_id;
use nodesdl_core::validate::Context;
use nodesdl_core::validate::ContextKind;
use nodesdl_core::validate::validate_filter;
use nodesdl_core::validate::validate_node;
use serde_json::json;
use std::fmt::Write;

fn synthetic_schema(type_count: usize) -> String {
    let mut schema = String::from("enum Status { ACTIVE SUSPENDED DELETED }\n");
    for i in 0..type_count {
        let prev = if i == 0 { type_count - 1 } else { i - 1 };
        let _ = write!(
            schema,
            r#"
type Entity{i} implements Node {{
  id: ID!
  name: String!
  score: Float
  status: Status
  tags: [String]
  owner: Entity{prev}
  children: NodeConnection(Entity{prev})
}}
"#,
        );
    }
    schema
}

fn build(source: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, source)
        .and_then(SchemaBuilder::build)
        .unwrap_or_else(|err| panic!("{}", err.format_detailed()))
}

// ─── Group 1: Schema Building ────────────────────────────

fn schema_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_build");

    for type_count in [5, 50, 500] {
        let source = synthetic_schema(type_count);
        group.bench_with_input(
            BenchmarkId::new("synthetic", type_count),
            &source,
            |b, source| b.iter(|| black_box(build(source))),
        );
    }

    group.finish();
}

// ─── Group 2: Payload Validation ─────────────────────────

fn payload_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_validation");

    let schema = build(&synthetic_schema(50));
    let owner_id = new_global_id("Entity0").unwrap_or_else(|err| panic!("{err}"));
    let node = json!({
        "name": "ten",
        "score": 1.5,
        "status": "ACTIVE",
        "tags": ["a", "b", "c"],
        "owner": owner_id,
    });
    let filter = json!({
        "name": {"matches": "^t"},
        "score": {"gte": 1, "lt": 5},
        "tags": {"some": {"eq": "a"}, "length": 3},
    });

    group.bench_function("node_entity1", |b| {
        b.iter(|| {
            let context = Context::for_type(ContextKind::AddNode, &schema, "Entity1");
            black_box(validate_node(context, &node))
        })
    });

    group.bench_function("filter_entity1", |b| {
        b.iter(|| {
            let context = Context::for_type(ContextKind::Filter, &schema, "Entity1");
            black_box(validate_filter(context, &filter))
        })
    });

    group.finish();
}

criterion_group!(benches, schema_build, payload_validation);
criterion_main!(benches);
