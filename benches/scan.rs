use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rexdiff::{pattern::Compiled, scan, suite::examples};

fn bench_suite(c: &mut Criterion) {
    for example in examples() {
        let prepared = match example.prepare() {
            Ok(prepared) => prepared,
            Err(err) => panic!("{}: {err}", example.name),
        };
        for failure in prepared.compile_failures() {
            panic!("{}: {failure}", example.name);
        }
        // Throughput numbers for engines that disagree on the matches are
        // meaningless, so semantics are checked before anything is timed.
        if let Err(err) = prepared.validate() {
            panic!("{}: {err}", example.name);
        }

        let haystack = prepared.haystack();
        let mut group = c.benchmark_group(example.name.as_str());
        for (engine, compiled) in prepared.engines() {
            match compiled {
                Compiled::One(pattern) => {
                    group.bench_function(engine.name(), |b| {
                        b.iter(|| scan::scan(black_box(haystack), pattern).unwrap())
                    });
                }
                Compiled::Many { patterns, set } => {
                    group.bench_function(engine.name(), |b| {
                        b.iter(|| scan::scan_groups(black_box(haystack), patterns).unwrap())
                    });
                    if let Some(set) = set {
                        group.bench_function(format!("{} set", engine.name()), |b| {
                            b.iter(|| {
                                scan::resolve_set(black_box(haystack), set, patterns).unwrap()
                            })
                        });
                    }
                }
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_suite);
criterion_main!(benches);
