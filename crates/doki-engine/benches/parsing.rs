use criterion::{Criterion, criterion_group, criterion_main};
use doki_engine::{BlockNesting, ParseOptions, TagRegistry, parse_with};
mod common;

fn bench_two_phase_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let registry = TagRegistry::with_defaults();
    let content = common::generate_doki_content(100);
    group.bench_function("two_phase", |b| {
        b.iter(|| {
            let out = parse_with(
                &registry,
                ParseOptions::default(),
                std::hint::black_box(&content),
            );
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_nesting_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting");
    group.sample_size(10);

    let registry = TagRegistry::with_defaults();
    let content = common::generate_nested_notes(50);
    for (label, nesting) in [
        ("balanced", BlockNesting::Balanced),
        ("legacy", BlockNesting::Legacy),
    ] {
        let options = ParseOptions {
            nesting,
            ..ParseOptions::default()
        };
        group.bench_function(label, |b| {
            b.iter(|| std::hint::black_box(parse_with(&registry, options, &content)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_two_phase_parse, bench_nesting_modes);
criterion_main!(benches);
