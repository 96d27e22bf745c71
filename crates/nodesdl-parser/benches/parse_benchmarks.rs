mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use nodesdl_parser::SdlParser;
use nodesdl_parser::printer::print_document;
use nodesdl_parser::token_source::StrSdlTokenSource;
use nodesdl_parser::visitor::strip_positions;

// ─── Group 1: Document Parsing ───────────────────────────

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    for type_count in [5, 50, 500] {
        let schema = fixtures::synthetic_schema(type_count);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("synthetic", type_count),
            &schema,
            |b, schema| {
                b.iter(|| {
                    let parser = SdlParser::new(schema);
                    black_box(parser.parse_document())
                })
            },
        );
    }

    let mutations = fixtures::mutations(200);
    group.bench_function("mutations_200", |b| {
        b.iter(|| {
            let parser = SdlParser::new(&mutations);
            black_box(parser.parse_document())
        })
    });

    group.finish();
}

// ─── Group 2: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let schema = fixtures::synthetic_schema(50);
    group.throughput(Throughput::Bytes(schema.len() as u64));
    group.bench_function("synthetic_50", |b| {
        b.iter(|| {
            let source = StrSdlTokenSource::new(&schema);
            for token in source {
                black_box(token);
            }
        })
    });

    group.finish();
}

// ─── Group 3: Printing and Visiting ──────────────────────

fn print_and_visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_and_visit");

    let schema = fixtures::synthetic_schema(50);
    let document = nodesdl_parser::parse(&schema)
        .unwrap_or_else(|error| panic!("{}", error.format_detailed(Some(&schema))));

    group.bench_function("print_synthetic_50", |b| {
        b.iter(|| black_box(print_document(&document)))
    });

    group.bench_function("strip_positions_synthetic_50", |b| {
        b.iter(|| black_box(strip_positions(&document)))
    });

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, schema_parse, lexer, print_and_visit);
criterion_main!(benches);
